//! Positional weight tables, indexed `[y][x]`. Corners are worth the most and
//! the squares touching a corner are penalised. Every table is symmetric
//! under a 180° rotation.

use crate::board::BOARD_SIZE;

pub type ScoreMap = [[i32; BOARD_SIZE]; BOARD_SIZE];

pub const WOLF_EARLY: ScoreMap = [
    [50, -5, 3, 3, -5, 50],
    [-5, -15, 1, 1, -15, -5],
    [3, 1, 0, 0, 1, 3],
    [3, 1, 0, 0, 1, 3],
    [-5, -15, 1, 1, -15, -5],
    [50, -5, 3, 3, -5, 50],
];

pub const WOLF_MID: ScoreMap = [
    [50, -10, 7, 7, -10, 50],
    [-10, -20, 2, 2, -20, -10],
    [7, 2, 5, 5, 2, 7],
    [7, 2, 5, 5, 2, 7],
    [-10, -20, 2, 2, -20, -10],
    [50, -10, 7, 7, -10, 50],
];

pub const WOLF_LATE: ScoreMap = [
    [100, -20, 20, 20, -20, 100],
    [-20, -30, 15, 15, -30, -20],
    [20, 15, 16, 16, 15, 20],
    [20, 15, 16, 16, 15, 20],
    [-20, -30, 15, 15, -30, -20],
    [100, -20, 20, 20, -20, 100],
];

pub const HONO: ScoreMap = [
    [100, -20, 10, 10, -20, 100],
    [-20, -50, 1, 1, -50, -20],
    [10, 1, 5, 5, 1, 10],
    [10, 1, 5, 5, 1, 10],
    [-20, -50, 1, 1, -50, -20],
    [100, -20, 10, 10, -20, 100],
];
