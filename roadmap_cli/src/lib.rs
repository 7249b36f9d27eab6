//! Terminal front end for the career roadmap generator.

pub mod commands;
pub mod components;
pub mod keymap;
pub mod screens;
pub mod ui;
