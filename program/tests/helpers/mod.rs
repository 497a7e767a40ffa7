#![allow(dead_code)]

pub mod initialize_builder;
