//! Tightening pass: slide pseudo-components to shorten edges.
//!
//! A pseudo-component is a maximal node set linked by zero-slack edges (direction ignored).
//! Moving one member alone would break a tight edge, so the whole set moves rigidly. A set with
//! more outgoing than incoming boundary edges gains by moving forward; one with more incoming
//! edges gains by moving back. A set moves until a boundary edge becomes tight, which merges it
//! with a neighbor, so there are fewer than `n` moves in total.
//!
//! With `preserve_extent`, moves that would carry a member past the drawing's current
//! `[min, max]` are skipped.

use super::constraint::Coord;
use super::longest_path::Dag;

pub(crate) struct PseudoComponents {
    /// Component id per node index. Ids follow the topological order of each set's first
    /// member.
    pub(crate) of: Vec<usize>,
    pub(crate) count: usize,
}

fn find(parent: &mut [usize], mut v: usize) -> usize {
    while parent[v] != v {
        parent[v] = parent[parent[v]];
        v = parent[v];
    }
    v
}

pub(crate) fn pseudo_components<L: Coord>(dag: &Dag<'_, L>, pos: &[L]) -> PseudoComponents {
    let n = dag.node_count();
    let mut parent: Vec<usize> = (0..n).collect();
    for e in &dag.edges {
        if dag.slack(e, pos) == L::zero() {
            let a = find(&mut parent, e.v);
            let b = find(&mut parent, e.w);
            if a != b {
                parent[b] = a;
            }
        }
    }

    let mut id_of_root: Vec<Option<usize>> = vec![None; n];
    let mut of = vec![0usize; n];
    let mut count = 0;
    for &v in &dag.topo {
        let root = find(&mut parent, v);
        let id = *id_of_root[root].get_or_insert_with(|| {
            count += 1;
            count - 1
        });
        of[v] = id;
    }
    PseudoComponents { of, count }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Shift<L> {
    Forward(L),
    Backward(L),
}

#[derive(Clone, Copy)]
struct Boundary<L> {
    outgoing: usize,
    incoming: usize,
    min_out_slack: Option<L>,
    min_in_slack: Option<L>,
    /// Smallest and largest member coordinate.
    extent: Option<(L, L)>,
}

fn min_opt<L: Coord>(current: Option<L>, candidate: L) -> Option<L> {
    match current {
        Some(c) if c <= candidate => Some(c),
        _ => Some(candidate),
    }
}

fn widen<L: Coord>(extent: Option<(L, L)>, p: L) -> Option<(L, L)> {
    match extent {
        None => Some((p, p)),
        Some((lo, hi)) => Some((
            if p < lo { p } else { lo },
            if p > hi { p } else { hi },
        )),
    }
}

/// First component (by id) that can move, and how far.
pub(crate) fn find_move<L: Coord>(
    dag: &Dag<'_, L>,
    pos: &[L],
    comps: &PseudoComponents,
    preserve_extent: bool,
) -> Option<(usize, Shift<L>)> {
    let mut boundary = vec![
        Boundary {
            outgoing: 0,
            incoming: 0,
            min_out_slack: None,
            min_in_slack: None,
            extent: None,
        };
        comps.count
    ];
    let mut drawing_extent: Option<(L, L)> = None;
    for (v, &p) in pos.iter().enumerate() {
        let b = &mut boundary[comps.of[v]];
        b.extent = widen(b.extent, p);
        drawing_extent = widen(drawing_extent, p);
    }
    let (low, high) = drawing_extent?;

    for e in &dag.edges {
        let (cv, cw) = (comps.of[e.v], comps.of[e.w]);
        if cv == cw {
            continue;
        }
        let slack = dag.slack(e, pos);
        let tail = &mut boundary[cv];
        tail.outgoing += 1;
        tail.min_out_slack = min_opt(tail.min_out_slack, slack);
        let head = &mut boundary[cw];
        head.incoming += 1;
        head.min_in_slack = min_opt(head.min_in_slack, slack);
    }

    let zero = L::zero();
    boundary.iter().enumerate().find_map(|(c, b)| {
        let (lo, hi) = b.extent?;
        if b.outgoing > b.incoming {
            b.min_out_slack
                .filter(|&s| s > zero && (!preserve_extent || hi + s <= high))
                .map(|s| (c, Shift::Forward(s)))
        } else if b.incoming > b.outgoing {
            b.min_in_slack
                .filter(|&s| s > zero && (!preserve_extent || lo >= low + s))
                .map(|s| (c, Shift::Backward(s)))
        } else {
            None
        }
    })
}

/// Runs the tightening loop in place and returns the number of moves made.
///
/// `max_steps == 0` means no explicit bound; the loop still stops after `n` moves, which the
/// merge argument above guarantees is never reached with exact arithmetic.
pub(crate) fn tighten<L: Coord>(
    dag: &Dag<'_, L>,
    pos: &mut [L],
    max_steps: usize,
    preserve_extent: bool,
) -> usize {
    let limit = if max_steps == 0 {
        dag.node_count()
    } else {
        max_steps
    };

    let mut steps = 0;
    while steps < limit {
        let comps = pseudo_components(dag, pos);
        let Some((c, shift)) = find_move(dag, pos, &comps, preserve_extent) else {
            break;
        };
        for (v, p) in pos.iter_mut().enumerate() {
            if comps.of[v] != c {
                continue;
            }
            *p = match shift {
                Shift::Forward(d) => *p + d,
                Shift::Backward(d) => *p - d,
            };
        }
        tracing::trace!(component = c, ?shift, "moved pseudo-component");
        steps += 1;
    }
    steps
}
