//! Plain-text state dumps read by the external viewers
//!
//! A state block is:
//! - one line with the timestamp
//! - one line per position axis (x, y[, z]), N space-separated values each
//! - one line per velocity axis (vx, vy[, vz])
//! - one line with the N masses, unless the layout is [`StateLayout::PhaseSpace`]
//!
//! Blocks are appended one after another, so a file holds a sequence of
//! frames. The legacy Python viewers read exactly `2 * D` array lines per
//! block, so files meant for them must be written with
//! [`StateLayout::PhaseSpace`]; with the mass line present their second frame
//! is misaligned.
//!
//! Alongside it, a tab-separated cluster table lists per-cluster parameters
//! (`DIMENSION`, `NB_FRAMES`, `NB_PARTICLES`, `DARK_MATTER`).
//!
//! Floats are written with Rust's shortest round-trip formatting, so reading
//! a block back yields the same bits.

use std::io::{BufRead, Write};

use crate::error::GenerationError;
use crate::simulation::scenario::GalaxyState;
use crate::simulation::states::{NVec, ParticleSet};

#[derive(Debug, thiserror::Error)]
pub enum StateFileError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid number `{token}`")]
    Parse { line: usize, token: String },

    #[error("line {line}: state block ended early")]
    Truncated { line: usize },

    #[error("line {line}: expected {expected} values, found {found}")]
    Ragged { line: usize, expected: usize, found: usize },

    #[error("line {line}: cluster table needs column `{column}`")]
    MissingColumn { line: usize, column: &'static str },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Which lines a state block carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateLayout {
    /// Positions, velocities, then masses
    #[default]
    WithMasses,
    /// Positions and velocities only; masses read back as zeros
    PhaseSpace,
}

impl StateLayout {
    fn nb_rows(self, dimension: usize) -> usize {
        match self {
            StateLayout::WithMasses => 2 * dimension + 1,
            StateLayout::PhaseSpace => 2 * dimension,
        }
    }
}

fn write_row<W: Write, I: IntoIterator<Item = f64>>(w: &mut W, values: I) -> std::io::Result<()> {
    let mut first = true;
    for v in values {
        if !first {
            w.write_all(b" ")?;
        }
        write!(w, "{v}")?;
        first = false;
    }
    writeln!(w)
}

/// Append one state block, mass line included
pub fn write_state<W: Write, const D: usize>(w: &mut W, t: f64, set: &ParticleSet<D>) -> Result<(), StateFileError> {
    write_state_with(w, t, set, StateLayout::WithMasses)
}

/// Append one state block in the given layout
pub fn write_state_with<W: Write, const D: usize>(
    w: &mut W,
    t: f64,
    set: &ParticleSet<D>,
    layout: StateLayout,
) -> Result<(), StateFileError> {
    writeln!(w, "{t}")?;
    for axis in 0..D {
        write_row(w, set.positions().iter().map(|x| x[axis]))?;
    }
    for axis in 0..D {
        write_row(w, set.velocities().iter().map(|v| v[axis]))?;
    }
    if layout == StateLayout::WithMasses {
        write_row(w, set.masses().iter().copied())?;
    }
    Ok(())
}

/// Append one state block for whichever dimension the galaxy has
pub fn write_galaxy_state<W: Write>(
    w: &mut W,
    t: f64,
    galaxy: &GalaxyState,
    layout: StateLayout,
) -> Result<(), StateFileError> {
    match galaxy {
        GalaxyState::Planar(g) => write_state_with(w, t, g.particles(), layout),
        GalaxyState::Spatial(g) => write_state_with(w, t, g.particles(), layout),
    }
}

/// Line reader that tracks 1-based line numbers
struct Lines<'a, R> {
    inner: &'a mut R,
    line: usize,
}

impl<R: BufRead> Lines<'_, R> {
    fn next_line(&mut self) -> Result<Option<String>, StateFileError> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn floats(&mut self) -> Result<Vec<f64>, StateFileError> {
        let line = self.line + 1;
        let text = self.next_line()?.ok_or(StateFileError::Truncated { line })?;
        text.split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| StateFileError::Parse {
                    line,
                    token: tok.to_string(),
                })
            })
            .collect()
    }
}

/// Read the next state block, mass line included
///
/// Returns `Ok(None)` at a clean end of input (no timestamp line left).
/// Line numbers in errors count from the start of the block.
pub fn read_state<R: BufRead, const D: usize>(r: &mut R) -> Result<Option<(f64, ParticleSet<D>)>, StateFileError> {
    read_state_with(r, StateLayout::WithMasses)
}

/// Read the next state block written in the given layout
pub fn read_state_with<R: BufRead, const D: usize>(
    r: &mut R,
    layout: StateLayout,
) -> Result<Option<(f64, ParticleSet<D>)>, StateFileError> {
    let mut lines = Lines { inner: r, line: 0 };

    let t = match lines.next_line()? {
        None => return Ok(None),
        Some(text) => text.trim().parse::<f64>().map_err(|_| StateFileError::Parse {
            line: 1,
            token: text.trim().to_string(),
        })?,
    };

    // D position rows, D velocity rows, then masses
    let nb_rows = layout.nb_rows(D);
    let mut rows = Vec::with_capacity(nb_rows);
    for _ in 0..nb_rows {
        rows.push(lines.floats()?);
    }
    let n = rows[0].len();
    for (k, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(StateFileError::Ragged {
                line: k + 2,
                expected: n,
                found: row.len(),
            });
        }
    }

    let column = |offset: usize, i: usize| NVec::<D>::from_fn(|axis, _| rows[offset + axis][i]);
    let positions = (0..n).map(|i| column(0, i)).collect();
    let velocities = (0..n).map(|i| column(D, i)).collect();
    let masses = match layout {
        StateLayout::WithMasses => rows[2 * D].clone(),
        StateLayout::PhaseSpace => vec![0.0; n],
    };

    Ok(Some((t, ParticleSet::new(positions, velocities, masses)?)))
}

/// One row of the cluster table
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterInfo {
    pub dimension: usize, // 2 or 3
    pub nb_frames: usize, // number of state blocks written
    pub nb_particles: usize, // particles in this cluster
    pub dark_matter: f64, // percentage of the cluster the viewer draws
}

/// Every particle of a generated galaxy is visible; halo mass is analytic
pub const ALL_VISIBLE: f64 = 100.0;

impl ClusterInfo {
    /// Table row for a freshly generated galaxy written over `nb_frames` blocks
    pub fn for_galaxy(galaxy: &GalaxyState, nb_frames: usize) -> Self {
        Self {
            dimension: galaxy.dimension(),
            nb_frames,
            nb_particles: galaxy.len(),
            dark_matter: ALL_VISIBLE,
        }
    }
}

const CLUSTER_COLUMNS: [&str; 4] = ["DIMENSION", "NB_FRAMES", "NB_PARTICLES", "DARK_MATTER"];

/// Write the tab-separated cluster table, header first
pub fn write_cluster_table<W: Write>(w: &mut W, clusters: &[ClusterInfo]) -> Result<(), StateFileError> {
    writeln!(w, "{}", CLUSTER_COLUMNS.join("\t"))?;
    for c in clusters {
        writeln!(w, "{}\t{}\t{}\t{}", c.dimension, c.nb_frames, c.nb_particles, c.dark_matter)?;
    }
    Ok(())
}

/// Read a cluster table keyed by its header; extra columns are ignored
pub fn read_cluster_table<R: BufRead>(r: &mut R) -> Result<Vec<ClusterInfo>, StateFileError> {
    let mut lines = Lines { inner: r, line: 0 };
    let header: Vec<String> = match lines.next_line()? {
        None => return Ok(Vec::new()),
        Some(text) => text.split('\t').map(|s| s.trim().to_string()).collect(),
    };

    let index_of = |column: &'static str| {
        header
            .iter()
            .position(|h| h == column)
            .ok_or(StateFileError::MissingColumn { line: 1, column })
    };
    let dim_idx = index_of("DIMENSION")?;
    let frames_idx = index_of("NB_FRAMES")?;
    let particles_idx = index_of("NB_PARTICLES")?;
    let dark_idx = index_of("DARK_MATTER")?;

    let mut out = Vec::new();
    while let Some(text) = lines.next_line()? {
        if text.trim().is_empty() {
            continue;
        }
        let line = lines.line;
        let cells: Vec<&str> = text.split('\t').map(str::trim).collect();
        if cells.len() < header.len() {
            return Err(StateFileError::Ragged {
                line,
                expected: header.len(),
                found: cells.len(),
            });
        }
        let parse_err = |tok: &str| StateFileError::Parse {
            line,
            token: tok.to_string(),
        };
        out.push(ClusterInfo {
            dimension: cells[dim_idx].parse().map_err(|_| parse_err(cells[dim_idx]))?,
            nb_frames: cells[frames_idx].parse().map_err(|_| parse_err(cells[frames_idx]))?,
            nb_particles: cells[particles_idx].parse().map_err(|_| parse_err(cells[particles_idx]))?,
            dark_matter: cells[dark_idx].parse().map_err(|_| parse_err(cells[dark_idx]))?,
        });
    }
    Ok(out)
}
