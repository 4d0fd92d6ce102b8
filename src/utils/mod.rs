pub mod arg_man;
pub mod tui;
