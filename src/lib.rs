//! Daily Wordle
//!
//! A daily word-guessing puzzle: one target word per calendar day, six
//! guesses, optional hard mode, and lifetime statistics that survive restarts.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::core::{GuessGrid, GuessRow, TileType, Word, evaluate_row};
//!
//! let target = Word::new("allow").unwrap();
//! let mut grid = GuessGrid::default();
//! grid[0] = GuessRow::from_word(&Word::new("llama").unwrap());
//!
//! let tiles = evaluate_row(&grid, 0, &target, 1);
//! assert_eq!(tiles[1], TileType::Correct);
//! ```

// Core domain types
pub mod core;

// Persisted session and statistics
pub mod session;

// Word lists and the answer table
pub mod wordlists;

// Startup, controller and render requests
pub mod game;

// File locations
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
