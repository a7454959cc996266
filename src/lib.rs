//! Fantasy Football Co-Manager
//!
//! A small web backend for one ESPN fantasy football team: it fetches league
//! data from ESPN on every request, projects it into JSON for a dashboard, and
//! forwards chat questions (optionally with a league summary) to an
//! OpenAI-compatible completion API.
//!
//! ## Endpoints
//!
//! | Route                    | Response                                          |
//! |--------------------------|---------------------------------------------------|
//! | `GET /`                  | dashboard HTML                                    |
//! | `GET /api/team-overview` | `{name, record, standing, points_for, waiver_rank}` |
//! | `GET /api/top-performers`| up to three `{name, position, team, last_week, proj}` |
//! | `GET /api/projections`   | `{weeks, actuals, projected}`                     |
//! | `GET /api/league-info`   | `[{id, name, owner, record, points_for, standing}]` |
//! | `GET /api/matchups`      | `[{week, home, home_score, away, away_score}]`    |
//! | `POST /api/chat`         | `{reply}` for a `{message}` body                  |
//!
//! ## Quick Start
//!
//! ```bash
//! export LEAGUE_ID=505229264 TEAM_ID=8 OPENAI_API_KEY=sk-...
//! # private leagues also need ESPN_S2 and SWID
//! ffl-comanager serve --port 5000
//! ```
//!
//! ## Testing against doubles
//!
//! Handlers only see the [`espn::LeagueProvider`],
//! [`completion::CompletionProvider`] and [`templates::TemplateRenderer`]
//! traits, so [`api::AppState::new`] accepts in-memory implementations.

pub mod api;
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod espn;
pub mod league;
pub mod models;
pub mod prompt;
pub mod templates;

// Re-export commonly used types
pub use cli::types::{LeagueId, Position, Season, TeamId, TeamIndex, Week};
pub use error::{ErrorKind, FflError, Result};
pub use league::LeagueSnapshot;
