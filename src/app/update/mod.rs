use crate::page::Effect;

mod core;
mod navigation;
mod scroll;
