//! # Groundnote Studio
//!
//! Generation features layered over retrieval: grounded question answering,
//! summaries, key insights, mind maps, quizzes, flashcards, tables of
//! contents, and audio overviews.
//!
//! Everything here is an external collaborator. The retrieval core hands
//! over chunk text and never learns whether generation succeeded; a model
//! outage degrades the studio, not search.
//!
//! Backends sit behind two boundary traits: [`ChatCompletion`] (implemented
//! by [`OpenAiChatClient`] for any OpenAI-compatible endpoint, Groq by
//! default) and [`SpeechSynthesizer`] (implemented by [`GoogleTts`]).

mod client;
mod error;
mod speech;
mod structured;
mod studio;

pub use client::{ChatCompletion, ChatRequest, OpenAiChatClient, DEFAULT_MODEL, GROQ_BASE_URL};
pub use error::{GenerationError, Result};
pub use speech::{GoogleTts, SpeechSynthesizer};
pub use structured::{try_parse_array, ParseError};
pub use studio::{AudioOverview, Flashcard, GroundedAnswer, QuizQuestion, Studio};
