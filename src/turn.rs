use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stone::Stone;
use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Play,
    Pass,
    Resign,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play => write!(f, "play"),
            Action::Pass => write!(f, "pass"),
            Action::Resign => write!(f, "resign"),
        }
    }
}

/// One entry in the append-only move log: who acted, where (for plays),
/// and how many stones the move captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub action: Action,
    pub stone: Stone,
    pub pos: Option<Point>,
    pub captured: u32,
}

impl Turn {
    pub fn play(stone: Stone, point: Point, captured: u32) -> Self {
        Turn {
            action: Action::Play,
            stone,
            pos: Some(point),
            captured,
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            action: Action::Pass,
            stone,
            pos: None,
            captured: 0,
        }
    }

    pub fn resign(stone: Stone) -> Self {
        Turn {
            action: Action::Resign,
            stone,
            pos: None,
            captured: 0,
        }
    }

    pub fn is_play(&self) -> bool {
        self.action == Action::Play
    }

    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }

    pub fn is_resign(&self) -> bool {
        self.action == Action::Resign
    }
}
