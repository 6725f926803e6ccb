//! Terminal front-end: reads `FROM,TO` coordinate pairs from stdin, drives
//! the rules engine, and renders the board after every accepted move. The
//! engine itself never prints; everything on screen is produced here.

use chess_rules::{
    Color, Game, GameState, PieceKind, Position, COLUMNS, DEFAULT_GAME_SECONDS,
};
use std::io::{self, BufRead, Write};

fn symbol(kind: PieceKind, color: Color) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

fn render(game: &Game, out: &mut impl Write) -> io::Result<()> {
    let legend: String = COLUMNS.iter().map(|c| format!("  {c}")).collect();
    writeln!(out, " {legend}")?;
    for (r, rank) in game.board_snapshot().iter().enumerate() {
        let row = 8 - r;
        let cells: String = rank
            .iter()
            .map(|occ| match occ {
                Some((kind, color)) => format!("  {}", symbol(*kind, *color)),
                None => "  ·".to_string(),
            })
            .collect();
        writeln!(out, "{row}{cells}  {row}")?;
    }
    writeln!(out, " {legend}")?;
    writeln!(
        out,
        "white {}  black {}",
        game.clock(Color::White).display(),
        game.clock(Color::Black).display()
    )?;
    Ok(())
}

fn parse_pair(line: &str) -> Option<(Position, Position)> {
    let mut parts = line.split(|c: char| c == ',' || c.is_whitespace());
    let from = parts.find(|p| !p.is_empty())?;
    let to = parts.find(|p| !p.is_empty())?;
    Some((
        Position::from_name(from).ok()?,
        Position::from_name(to).ok()?,
    ))
}

fn parse_promotion(line: &str) -> Option<PieceKind> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "queen" => Some(PieceKind::Queen),
        "r" | "rook" => Some(PieceKind::Rook),
        "b" | "bishop" => Some(PieceKind::Bishop),
        "n" | "knight" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn main() {
    let clock_seconds = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_GAME_SECONDS);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = Game::new(clock_seconds);

    render(&game, &mut stdout).ok();
    // the pawn awaiting promotion when a move left one on the back rank
    let mut promoting: Option<Position> = None;

    print!("enter move as FROM,TO (q to quit): ");
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(pawn) = promoting {
            match parse_promotion(input) {
                Some(kind) => match game.promote(pawn, kind) {
                    Ok(()) => promoting = None,
                    Err(e) => eprintln!("{e}"),
                },
                None => eprintln!("could not parse promotion piece: {input}"),
            }
            if promoting.is_some() {
                print!("promote {pawn} to (q/r/b/n): ");
                stdout.flush().ok();
                continue;
            }
        } else {
            match parse_pair(input) {
                Some((from, to)) => {
                    if let Err(e) = game.make_move(from, to) {
                        eprintln!("{e}");
                    }
                }
                None => {
                    eprintln!("could not parse action: {input}");
                }
            }
        }

        render(&game, &mut stdout).ok();

        match game.state() {
            GameState::Check => println!("{:?} is in check", game.turn),
            GameState::Checkmate => {
                println!("checkmate, {:?} wins", game.turn.other());
                break;
            }
            GameState::OutOfTime => {
                println!("{:?} is out of time", game.turn);
                break;
            }
            GameState::Normal | GameState::Stalemate => {}
        }

        if let Some(pawn) = game.which_pawn_promotable() {
            promoting = Some(pawn);
            print!("promote {pawn} to (q/r/b/n): ");
        } else {
            print!("enter move as FROM,TO (q to quit): ");
        }
        stdout.flush().ok();
    }
}
