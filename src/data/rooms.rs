//! The mansion map
//!
//! A fixed binary tree of rooms. The shape is hand-authored by the case
//! file at startup and never changes afterwards; the only mutation a room
//! ever sees is having its clue collected.

use serde::{Deserialize, Serialize};

/// Handle to a room in a [`MansionMap`]
///
/// Ids are only ever produced by the map that owns the room, so indexing
/// with them cannot dangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// A single room in the mansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// The clue hidden here, if any; taken on first collection
    clue: Option<String>,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

/// The mansion: an arena of rooms forming a binary tree
///
/// An arena keeps the "current room" a plain copyable id instead of a
/// borrow into an owned recursive tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MansionMap {
    rooms: Vec<Room>,
    root: RoomId,
}

impl MansionMap {
    /// Create a map containing only the root room
    pub fn new(root_name: &str, clue: Option<&str>) -> Self {
        let root = Room {
            name: root_name.to_string(),
            clue: clue.map(String::from),
            left: None,
            right: None,
        };
        Self {
            rooms: vec![root],
            root: RoomId(0),
        }
    }

    /// The entrance room
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn add_room(&mut self, name: &str, clue: Option<&str>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: name.to_string(),
            clue: clue.map(String::from),
            left: None,
            right: None,
        });
        id
    }

    /// Attach a new room as the left child of `parent`
    pub fn add_left(&mut self, parent: RoomId, name: &str, clue: Option<&str>) -> RoomId {
        debug_assert!(self.rooms[parent.0].left.is_none());
        let id = self.add_room(name, clue);
        self.rooms[parent.0].left = Some(id);
        id
    }

    /// Attach a new room as the right child of `parent`
    pub fn add_right(&mut self, parent: RoomId, name: &str, clue: Option<&str>) -> RoomId {
        debug_assert!(self.rooms[parent.0].right.is_none());
        let id = self.add_room(name, clue);
        self.rooms[parent.0].right = Some(id);
        id
    }

    /// The room through the left door, if there is one
    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.rooms[id.0].left
    }

    /// The room through the right door, if there is one
    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.rooms[id.0].right
    }

    pub fn name(&self, id: RoomId) -> &str {
        &self.rooms[id.0].name
    }

    /// Whether the room still holds an uncollected clue
    pub fn has_clue(&self, id: RoomId) -> bool {
        self.rooms[id.0].clue.is_some()
    }

    /// Rooms still holding an uncollected clue
    pub fn remaining_clues(&self) -> usize {
        self.rooms.iter().filter(|r| r.clue.is_some()).count()
    }

    /// Take the room's clue
    ///
    /// Returns the clue the first time it is called on a room with one;
    /// every later call on the same room returns `None`.
    pub fn collect_clue(&mut self, id: RoomId) -> Option<String> {
        self.rooms[id.0].clue.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_map() -> (MansionMap, RoomId) {
        let mut map = MansionMap::new("Hall", None);
        let study = map.add_left(map.root(), "Study", Some("a torn letter"));
        (map, study)
    }

    #[test]
    fn clue_collected_exactly_once() {
        let (mut map, study) = two_room_map();
        assert!(map.has_clue(study));
        assert_eq!(map.collect_clue(study), Some("a torn letter".to_string()));
        assert!(!map.has_clue(study));
        assert_eq!(map.collect_clue(study), None);
        assert_eq!(map.collect_clue(study), None);
    }

    #[test]
    fn missing_children_are_blocked_not_errors() {
        let (map, study) = two_room_map();
        assert_eq!(map.left(map.root()), Some(study));
        assert_eq!(map.right(map.root()), None);
        assert_eq!(map.left(study), None);
    }

    #[test]
    fn topology_is_what_was_assembled() {
        let mut map = MansionMap::new("Hall", None);
        let a = map.add_left(map.root(), "A", None);
        let b = map.add_right(map.root(), "B", None);
        let c = map.add_right(b, "C", None);
        assert_eq!(map.room_count(), 4);
        assert_eq!(map.left(map.root()), Some(a));
        assert_eq!(map.right(b), Some(c));
        assert_eq!(map.name(c), "C");
    }
}
