// src/gui/components/mod.rs
pub mod action_bar;
pub mod card_detail;
pub mod card_table;
pub mod filter_panel;
