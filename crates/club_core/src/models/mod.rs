pub mod formation;
pub mod lineup;
pub mod match_record;
pub mod media;
pub mod player;
pub mod team;

pub use formation::Formation;
pub use lineup::{SavedLineup, SubRecord};
pub use match_record::{MatchRecord, SubMatch, Substitution, MAX_SUBSTITUTION_MINUTE};
pub use media::{Comment, Photo};
pub use player::Player;
pub use team::{UniformSet, UniformSettings};
