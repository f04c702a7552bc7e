pub(crate) mod dealer;
pub(crate) mod game;
pub(crate) mod heuristic;
pub(crate) mod selector;
pub(crate) mod snake;
pub(crate) mod tile;
