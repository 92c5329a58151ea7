mod game;
mod player;
mod recording;
mod score;
pub use game::*;
pub use player::*;
pub use recording::*;
pub use score::*;
