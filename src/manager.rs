use log::*;

#[derive(Debug, PartialEq)]
pub struct Task {
    pub row: usize,
}

#[derive(Debug)]
enum ManagerState {
    Halted,
    Progress { next_row: usize },
}

/// Hands out canvas rows to render workers, one row per request.
#[derive(Debug)]
pub struct Manager {
    rows: usize,
    state: ManagerState,
}

impl Manager {
    pub fn new(rows: usize) -> Self {
        Manager {
            rows,
            state: ManagerState::Progress { next_row: 0 },
        }
    }

    pub fn next(&mut self, thread_id: usize) -> Option<Task> {
        use ManagerState::*;
        match self.state {
            Halted => None,
            Progress { next_row } if next_row >= self.rows => {
                debug!("thread {}: no rows left", thread_id);
                self.state = Halted;
                None
            }
            Progress { next_row } => {
                self.state = Progress {
                    next_row: next_row + 1,
                };
                Some(Task { row: next_row })
            }
        }
    }

    //remaining rows are dropped; rows already handed out still complete
    pub fn halt(&mut self) {
        self.state = ManagerState::Halted;
    }
}
