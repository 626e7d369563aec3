use hashbrown::HashSet;

use crate::triangle::Triangle;
use crate::types::{TriangleId, VertexId};

/// Defines debug recording of the Triangulation
#[derive(Debug, Clone)]
pub enum PhaseRecord {
    /// Records all the phases
    All,
    /// Records the steps during the specified phase
    In(TriangulationPhase),
    /// Records the steps during the specified phases
    InAny(HashSet<TriangulationPhase>),
}

/// Defines debug recording of the Triangulation
#[derive(Debug, Clone)]
pub enum StepsRecord {
    /// Records all the steps
    All,
    /// Records all the steps after the specified one (inclusive)
    From(usize),
    /// Records all the steps until the specified one (inclusive)
    Until(usize),
    /// Records all the steps between the specified ones (inclusive)
    Between(usize, usize),
}

#[derive(Debug, Clone)]
pub struct DebugConfiguration {
    pub phase_record: PhaseRecord,
    pub steps_record: StepsRecord,
    /// [None] means that it won't force an early exit
    pub force_end_at_step: Option<usize>,
}
impl Default for DebugConfiguration {
    fn default() -> Self {
        Self {
            phase_record: PhaseRecord::All,
            steps_record: StepsRecord::All,
            force_end_at_step: Default::default(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TriangulationPhase {
    SuperTriangleInsertion,
    CavityRetriangulation,
    RemoveSuperTriangle,
}

/// State of the live triangles after a phase of the algorithm
#[derive(Debug, Clone)]
pub struct DebugSnapshot {
    pub step: usize,
    pub triangulation_phase: TriangulationPhase,
    /// Vertex inserted during this step, if any
    pub inserted_vertex: Option<VertexId>,
    /// Ids (in `triangles`) of the triangles created during this step
    pub changed_ids: Vec<TriangleId>,
    pub triangles: Vec<Option<Triangle>>,
}

#[derive(Debug, Clone)]
pub struct DebugContext {
    pub config: DebugConfiguration,
    pub snapshots: Vec<DebugSnapshot>,
    /// Step 0 is the super triangle insertion, step n is the insertion of the vertex n-1
    pub current_step: usize,
}

impl DebugContext {
    pub(crate) fn new(config: DebugConfiguration) -> Self {
        Self {
            config,
            snapshots: Vec::new(),
            current_step: 0,
        }
    }

    fn should_record(&self, phase: TriangulationPhase) -> bool {
        let record = match &self.config.phase_record {
            PhaseRecord::All => true,
            PhaseRecord::InAny(phases) => phases.contains(&phase),
            PhaseRecord::In(rec_phase) => phase == *rec_phase,
        };
        record
            && match self.config.steps_record {
                StepsRecord::All => true,
                StepsRecord::From(from) => self.current_step >= from,
                StepsRecord::Until(to) => self.current_step <= to,
                StepsRecord::Between(from, to) => {
                    self.current_step >= from && self.current_step <= to
                }
            }
    }

    pub(crate) fn push_snapshot(
        &mut self,
        phase: TriangulationPhase,
        inserted_vertex: Option<VertexId>,
        triangles: &[Option<Triangle>],
        changed_ids: &[TriangleId],
    ) {
        if !self.should_record(phase) {
            return;
        }
        self.snapshots.push(DebugSnapshot {
            step: self.current_step,
            triangulation_phase: phase,
            inserted_vertex,
            changed_ids: changed_ids.to_vec(),
            triangles: triangles.to_vec(),
        });
    }

    /// Moves to the next step. Returns true if the algorithm should stop
    pub(crate) fn advance_step(&mut self) -> bool {
        self.current_step += 1;
        match self.config.force_end_at_step {
            Some(end_step) => self.current_step >= end_step,
            None => false,
        }
    }
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
