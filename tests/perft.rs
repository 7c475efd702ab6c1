//! Perft node and tally counts for the standard correctness positions.

use position_engine::game_state::chess_types::*;
use position_engine::game_state::game_state::GameState;
use position_engine::game_state::position_builder::PositionBuilder;
use position_engine::move_generation::perft::{perft, PerftCounts};
use pretty_assertions::assert_eq;

fn position(placement: &str, side_to_move: Color, rights: CastlingRights) -> GameState {
    PositionBuilder::from_placement(placement)
        .expect("fixture placement should parse")
        .side_to_move(side_to_move)
        .castling_rights(rights)
        .build()
        .expect("fixture position should be valid")
}

fn nodes(game: &GameState, depth: u8) -> u64 {
    perft(game, depth).expect("perft should run").nodes
}

#[test]
fn start_position() {
    let built = position(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        Color::White,
        CASTLE_ALL,
    );
    assert_eq!(built, GameState::new_game());

    assert_eq!(nodes(&built, 1), 20);
    assert_eq!(nodes(&built, 2), 400);
    assert_eq!(nodes(&built, 3), 8902);
    assert_eq!(
        perft(&built, 4).expect("perft should run"),
        PerftCounts {
            nodes: 197_281,
            captures: 1576,
            checks: 469,
            checkmates: 8,
            ..PerftCounts::default()
        }
    );
}

#[test]
fn kiwipete() {
    let game = position(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        Color::White,
        CASTLE_ALL,
    );

    assert_eq!(
        perft(&game, 1).expect("perft should run"),
        PerftCounts {
            nodes: 48,
            captures: 8,
            castles: 2,
            ..PerftCounts::default()
        }
    );
    assert_eq!(
        perft(&game, 2).expect("perft should run"),
        PerftCounts {
            nodes: 2039,
            captures: 351,
            en_passant: 1,
            castles: 91,
            checks: 3,
            ..PerftCounts::default()
        }
    );
}

#[test]
fn rook_and_pawn_endgame() {
    let game = position("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8", Color::White, 0);

    assert_eq!(nodes(&game, 1), 14);
    assert_eq!(
        perft(&game, 2).expect("perft should run"),
        PerftCounts {
            nodes: 191,
            captures: 14,
            checks: 10,
            ..PerftCounts::default()
        }
    );
    assert_eq!(
        perft(&game, 3).expect("perft should run"),
        PerftCounts {
            nodes: 2812,
            captures: 209,
            en_passant: 2,
            checks: 267,
            ..PerftCounts::default()
        }
    );
}

#[test]
fn promotions_and_pins_black_to_move() {
    let game = position(
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R",
        Color::Black,
        CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
    );

    assert_eq!(nodes(&game, 1), 6);
    assert_eq!(nodes(&game, 2), 264);
    assert_eq!(nodes(&game, 3), 9467);
}

#[test]
fn discovered_checks_and_underpromotion() {
    let game = position(
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
        Color::White,
        CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
    );

    assert_eq!(nodes(&game, 1), 44);
    assert_eq!(nodes(&game, 2), 1486);
}
