//! Localization tables for notification text.
//!
//! The engine never formats text. Consumers that want display strings pick
//! a [`Language`] and render payload fields through a [`Localizer`].
//! Selecting a language by code goes through a [`LanguageSelector`] whose
//! fallback behaviour is explicit: unknown codes either fail or fall back
//! with a warning, never silently.

use crate::core::Orientation;
use crate::engine::Notification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::warn;

/// Errors from language selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),
}

/// Supported display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    Pt,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Pt => "pt",
        }
    }

    /// Message templates for this language.
    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Language::En => &ENGLISH,
            Language::Es => &SPANISH,
            Language::Fr => &FRENCH,
            Language::Pt => &PORTUGUESE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| LocaleError::UnknownLanguage(s.to_string()))
    }
}

/// What to do with a language code nobody recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Reject the code.
    Strict,
    /// Use the given language and log a warning.
    To(Language),
}

/// Maps language codes to languages under an explicit fallback policy.
///
/// # Example
///
/// ```rust
/// use tictac::locale::{Fallback, Language, LanguageSelector};
///
/// let strict = LanguageSelector::new(Fallback::Strict);
/// assert_eq!(strict.select("fr"), Ok(Language::Fr));
/// assert!(strict.select("de").is_err());
///
/// let lenient = LanguageSelector::new(Fallback::To(Language::En));
/// assert_eq!(lenient.select("de"), Ok(Language::En));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageSelector {
    fallback: Fallback,
}

impl LanguageSelector {
    pub fn new(fallback: Fallback) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    pub fn select(&self, code: &str) -> Result<Language, LocaleError> {
        match (code.parse::<Language>(), self.fallback) {
            (Ok(language), _) => Ok(language),
            (Err(error), Fallback::Strict) => Err(error),
            (Err(_), Fallback::To(language)) => {
                warn!(code, fallback = language.code(), "unknown language code, falling back");
                Ok(language)
            }
        }
    }
}

/// Message templates for one language.
///
/// Templates use `{player}`, `{row}`, `{col}`, `{moves}` and
/// `{orientation}` placeholders.
#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    pub turn: &'static str,
    pub invalid_move: &'static str,
    pub inactive: &'static str,
    pub move_made: &'static str,
    pub winner: &'static str,
    pub tied: &'static str,
    pub reset: &'static str,
    /// Names of the row, column, main diagonal and anti-diagonal
    pub orientations: [&'static str; 4],
}

impl Catalog {
    /// Localized name of a line orientation.
    pub fn orientation(&self, orientation: Orientation) -> &'static str {
        let index = match orientation {
            Orientation::Row => 0,
            Orientation::Column => 1,
            Orientation::DiagonalMain => 2,
            Orientation::DiagonalAnti => 3,
        };
        self.orientations[index]
    }
}

static ENGLISH: Catalog = Catalog {
    turn: "{player}'s turn",
    invalid_move: "Invalid position! Try again.",
    inactive: "The game is over. Reset to play again.",
    move_made: "{player} placed at [{row},{col}]",
    winner: "{player} WINS in {moves} moves along the {orientation}! Congratulations!",
    tied: "It's a TIE after {moves} moves! Well played both!",
    reset: "Game reset",
    orientations: ["row", "column", "diagonal", "anti-diagonal"],
};

static SPANISH: Catalog = Catalog {
    turn: "Turno de {player}",
    invalid_move: "¡Posición inválida! Intenta de nuevo.",
    inactive: "El juego terminó. Reinicia para jugar de nuevo.",
    move_made: "{player} colocó en [{row},{col}]",
    winner: "¡{player} GANA en {moves} movimientos con una {orientation}! ¡Felicidades!",
    tied: "¡Es un EMPATE tras {moves} movimientos! ¡Bien jugado!",
    reset: "Juego reiniciado",
    orientations: ["fila", "columna", "diagonal", "diagonal inversa"],
};

static FRENCH: Catalog = Catalog {
    turn: "Tour de {player}",
    invalid_move: "Position invalide ! Réessayez.",
    inactive: "La partie est terminée. Réinitialisez pour rejouer.",
    move_made: "{player} placé à [{row},{col}]",
    winner: "{player} GAGNE en {moves} coups sur une {orientation} ! Félicitations !",
    tied: "Match NUL après {moves} coups ! Bien joué !",
    reset: "Jeu réinitialisé",
    orientations: ["ligne", "colonne", "diagonale", "anti-diagonale"],
};

static PORTUGUESE: Catalog = Catalog {
    turn: "Vez de {player}",
    invalid_move: "Posição inválida! Tente novamente.",
    inactive: "O jogo terminou. Reinicie para jogar novamente.",
    move_made: "{player} colocou em [{row},{col}]",
    winner: "{player} GANHOU em {moves} jogadas com uma {orientation}! Parabéns!",
    tied: "É um EMPATE após {moves} jogadas! Bem jogado!",
    reset: "Jogo reiniciado",
    orientations: ["linha", "coluna", "diagonal", "diagonal inversa"],
};

/// Renders notifications as display text in one language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Text for a notification.
    ///
    /// ```rust
    /// use tictac::core::Marker;
    /// use tictac::engine::{Notification, TurnChanged};
    /// use tictac::locale::{Language, Localizer};
    ///
    /// let event = Notification::TurnChanged(TurnChanged { next_player: Marker::O });
    /// assert_eq!(Localizer::new(Language::Es).render(&event), "Turno de O");
    /// ```
    pub fn render(&self, notification: &Notification) -> String {
        let catalog = self.language.catalog();
        let mut fields = Fields::default();
        let template = match notification {
            Notification::InvalidMove(event) => {
                fields.player = Some(event.player.to_string());
                catalog.invalid_move
            }
            Notification::GameInactive(_) => catalog.inactive,
            Notification::MoveMade(event) => {
                fields.player = Some(event.player.to_string());
                fields.row = Some(event.cell.row());
                fields.col = Some(event.cell.col());
                catalog.move_made
            }
            Notification::TurnChanged(event) => {
                fields.player = Some(event.next_player.to_string());
                catalog.turn
            }
            Notification::GameWon(event) => {
                fields.player = Some(event.winner.to_string());
                fields.moves = Some(event.moves);
                fields.orientation = Some(catalog.orientation(event.line.orientation()));
                catalog.winner
            }
            Notification::GameTied(event) => {
                fields.moves = Some(event.moves);
                catalog.tied
            }
            Notification::GameReset(_) => catalog.reset,
        };
        fields.fill(template)
    }
}

#[derive(Default)]
struct Fields {
    player: Option<String>,
    row: Option<usize>,
    col: Option<usize>,
    moves: Option<usize>,
    orientation: Option<&'static str>,
}

impl Fields {
    fn fill(&self, template: &str) -> String {
        let mut text = template.to_string();
        if let Some(player) = &self.player {
            text = text.replace("{player}", player);
        }
        if let Some(row) = self.row {
            text = text.replace("{row}", &row.to_string());
        }
        if let Some(col) = self.col {
            text = text.replace("{col}", &col.to_string());
        }
        if let Some(moves) = self.moves {
            text = text.replace("{moves}", &moves.to_string());
        }
        if let Some(orientation) = self.orientation {
            text = text.replace("{orientation}", orientation);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, CellRef, Marker};
    use crate::engine::{GameTied, GameWon, MoveMade};
    use uuid::Uuid;

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("PT".parse::<Language>(), Ok(Language::Pt));
        assert_eq!(" es ".parse::<Language>(), Ok(Language::Es));
        assert_eq!(
            "xx".parse::<Language>(),
            Err(LocaleError::UnknownLanguage("xx".to_string()))
        );
    }

    #[test]
    fn every_language_code_parses_back() {
        let codes: Vec<&str> = Language::iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "pt"]);
        for language in Language::iter() {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn strict_selector_rejects_typos() {
        let selector = LanguageSelector::new(Fallback::Strict);
        assert_eq!(
            selector.select("eng"),
            Err(LocaleError::UnknownLanguage("eng".to_string()))
        );
    }

    #[test]
    fn fallback_selector_uses_configured_language() {
        let selector = LanguageSelector::new(Fallback::To(Language::Pt));
        assert_eq!(selector.select("klingon"), Ok(Language::Pt));
        assert_eq!(selector.select("fr"), Ok(Language::Fr));
    }

    #[test]
    fn move_made_fills_coordinates() {
        let event = Notification::MoveMade(MoveMade {
            player: Marker::X,
            cell: CellRef::new(2, 1).unwrap(),
            board: Board::new(),
        });

        assert_eq!(Localizer::new(Language::En).render(&event), "X placed at [2,1]");
        assert_eq!(Localizer::new(Language::Fr).render(&event), "X placé à [2,1]");
    }

    #[test]
    fn win_names_the_completed_line() {
        let mut board = Board::new();
        for id in [3, 5, 7] {
            board.place_at(CellRef::from_id(id).unwrap(), Marker::O).unwrap();
        }
        let line = board.all_lines()[7].clone();
        assert_eq!(line.orientation(), Orientation::DiagonalAnti);
        let event = Notification::GameWon(GameWon {
            game_id: Uuid::nil(),
            winner: Marker::O,
            moves: 6,
            board,
            line,
        });

        assert_eq!(
            Localizer::new(Language::En).render(&event),
            "O WINS in 6 moves along the anti-diagonal! Congratulations!"
        );
        assert_eq!(
            Localizer::new(Language::Es).render(&event),
            "¡O GANA en 6 movimientos con una diagonal inversa! ¡Felicidades!"
        );
    }

    #[test]
    fn tie_reports_move_count() {
        let event = Notification::GameTied(GameTied {
            game_id: Uuid::nil(),
            moves: 9,
            board: Board::new(),
        });

        assert_eq!(
            Localizer::new(Language::En).render(&event),
            "It's a TIE after 9 moves! Well played both!"
        );
    }

    #[test]
    fn every_language_has_a_distinct_catalog() {
        for language in Language::iter() {
            let others = Language::iter().filter(|l| *l != language);
            for other in others {
                assert_ne!(language.catalog(), other.catalog());
            }
        }
    }
}
