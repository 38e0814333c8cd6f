use serde::{Deserialize, Serialize};
use std::fmt;

use closetkit_core::constants;

/// A wall of the rectangular room, named by its side in plan view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Left,
    Top,
    Right,
    Bottom,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Left, Wall::Top, Wall::Right, Wall::Bottom];
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Top => write!(f, "top"),
            Self::Right => write!(f, "right"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenDirection {
    Inward,
    Outward,
}

/// Entry door. Persisted as `{ wall, offset, width, isOpen, openDirection }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    pub wall: Wall,
    /// Distance along the wall from its start (left end or top end).
    pub offset: f64,
    pub width: f64,
    pub is_open: bool,
    pub open_direction: OpenDirection,
}

impl Default for Door {
    fn default() -> Self {
        Self {
            wall: Wall::Bottom,
            offset: constants::DEFAULT_DOOR_OFFSET,
            width: constants::DEFAULT_DOOR_WIDTH,
            is_open: false,
            open_direction: OpenDirection::Inward,
        }
    }
}

/// Sparse update for the door. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoorUpdate {
    pub wall: Option<Wall>,
    pub offset: Option<f64>,
    pub width: Option<f64>,
    pub is_open: Option<bool>,
    pub open_direction: Option<OpenDirection>,
}

impl DoorUpdate {
    pub fn apply_to(&self, door: &mut Door) {
        if let Some(wall) = self.wall {
            door.wall = wall;
        }
        if let Some(offset) = self.offset {
            door.offset = offset;
        }
        if let Some(width) = self.width {
            door.width = width;
        }
        if let Some(is_open) = self.is_open {
            door.is_open = is_open;
        }
        if let Some(direction) = self.open_direction {
            door.open_direction = direction;
        }
    }
}

/// Room outline with its door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub door: Door,
}

impl Room {
    /// Creates a room and pulls the default door onto its walls.
    pub fn new(width: f64, depth: f64) -> Self {
        let mut room = Self {
            width,
            depth,
            door: Door::default(),
        };
        room.door = room.clamp_door(room.door.clone());
        room
    }

    /// Length of `wall`: top/bottom run along the width, left/right along the depth.
    pub fn wall_length(&self, wall: Wall) -> f64 {
        match wall {
            Wall::Top | Wall::Bottom => self.width,
            Wall::Left | Wall::Right => self.depth,
        }
    }

    /// Returns `door` adjusted so that `offset + width <= wall length`.
    pub fn clamp_door(&self, mut door: Door) -> Door {
        let length = self.wall_length(door.wall).max(0.0);
        door.width = door.width.clamp(0.0, length);
        door.offset = door.offset.clamp(0.0, length - door.width);
        door
    }

    pub fn door_fits(&self) -> bool {
        let length = self.wall_length(self.door.wall);
        self.door.offset >= 0.0 && self.door.offset + self.door.width <= length
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new(constants::DEFAULT_ROOM_WIDTH, constants::DEFAULT_ROOM_DEPTH)
    }
}
