use crate::client::{ChatCompletion, ChatRequest};
use crate::error::{GenerationError, Result};
use crate::speech::SpeechSynthesizer;
use crate::structured::try_parse_array;
use groundnote_store::RetrievedChunk;
use serde::{Deserialize, Serialize};

/// Leading-chunk budget per feature. Wide-context features read more of the
/// corpus; the summary and audio script stay tight to keep prompts small.
const SUMMARY_CHUNKS: usize = 5;
const INSIGHT_CHUNKS: usize = 10;
const MIND_MAP_CHUNKS: usize = 10;
const QUIZ_CHUNKS: usize = 10;
const FLASHCARD_CHUNKS: usize = 8;
const TOC_CHUNKS: usize = 6;
const AUDIO_CHUNKS: usize = 5;

const NOT_FOUND_ANSWER: &str = "I couldn't find relevant information in the documents.";

/// A grounded answer with its supporting chunks
#[derive(Debug, Clone, Serialize)]
pub struct GroundedAnswer {
    /// Generated answer text
    pub answer: String,

    /// Distinct source document names, in retrieval order
    pub sources: Vec<String>,

    /// Flattened chunk indices the answer was grounded on
    pub citations: Vec<usize>,
}

/// One multiple-choice quiz question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// One question/answer study card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// An audio overview: the generated script plus its MP3 rendition
#[derive(Debug, Clone)]
pub struct AudioOverview {
    pub script: String,
    pub audio: Vec<u8>,
}

/// Generation features over document chunks.
///
/// Every method takes chunk text the caller pulled from the store, so the
/// retrieval core never depends on this crate. Structured features recover
/// JSON from the model's reply and fail closed to an empty list when the
/// reply cannot be parsed; transport and API failures surface as
/// [`GenerationError`].
pub struct Studio<C> {
    chat: C,
}

impl<C: ChatCompletion> Studio<C> {
    pub fn new(chat: C) -> Self {
        Self { chat }
    }

    /// Answer a question grounded strictly in the retrieved chunks.
    ///
    /// Empty retrieval short-circuits to a canned not-found answer without
    /// calling the model.
    pub async fn answer(
        &self,
        question: &str,
        retrieved: &[RetrievedChunk],
    ) -> Result<GroundedAnswer> {
        if retrieved.is_empty() {
            return Ok(GroundedAnswer {
                answer: NOT_FOUND_ANSWER.to_string(),
                sources: Vec::new(),
                citations: Vec::new(),
            });
        }

        let context = retrieved
            .iter()
            .map(|c| {
                format!(
                    "[Source: {}, Chunk {}]\n{}",
                    c.doc_name,
                    c.chunk_index + 1,
                    c.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let system = "You are a helpful assistant that answers questions based on provided documents.\n\
                      You MUST ONLY use information from the provided document chunks.\n\
                      If the answer is not in the documents, say so clearly.\n\
                      Always be accurate and provide clear, concise answers.\n\
                      Cite your sources when making claims.";

        let prompt = format!(
            "Answer this question based ONLY on the provided document chunks: {question}\n\n\
             DOCUMENT CHUNKS:\n{context}\n\n\
             Provide a clear, concise answer."
        );

        let answer = self
            .chat
            .complete(&ChatRequest {
                system: Some(system.to_string()),
                prompt,
                temperature: 0.7,
                max_tokens: 500,
            })
            .await?;

        let mut sources: Vec<String> = Vec::new();
        for chunk in retrieved {
            if !sources.contains(&chunk.doc_name) {
                sources.push(chunk.doc_name.clone());
            }
        }

        Ok(GroundedAnswer {
            answer,
            sources,
            citations: retrieved.iter().map(|c| c.chunk_index).collect(),
        })
    }

    /// A 2-3 paragraph prose summary of the leading chunks
    pub async fn summary(&self, chunks: &[String]) -> Result<String> {
        let context = context_of(chunks, SUMMARY_CHUNKS)?;
        let prompt = format!(
            "Provide a concise summary (2-3 paragraphs) of the following document excerpt:\n\n\
             {context}\n\n\
             Focus on the main ideas and key points."
        );
        self.chat.complete(&ChatRequest::user(prompt, 400)).await
    }

    /// Five key insights as plain strings; empty on unparseable output
    pub async fn key_insights(&self, chunks: &[String]) -> Result<Vec<String>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }
        let context = context_of(chunks, INSIGHT_CHUNKS)?;
        let prompt = format!(
            "Extract 5 key insights from this document text.\n\
             Format as a JSON list of strings.\n\n\
             Document:\n{context}\n\n\
             Return ONLY valid JSON in this format:\n\
             [\"insight 1\", \"insight 2\", \"insight 3\", \"insight 4\", \"insight 5\"]"
        );

        let response = self.chat.complete(&ChatRequest::user(prompt, 500)).await?;
        Ok(parse_or_empty(&response, "key insights"))
    }

    /// An ASCII-tree mind map of the corpus
    pub async fn mind_map(&self, chunks: &[String]) -> Result<String> {
        let context = context_of(chunks, MIND_MAP_CHUNKS)?;
        let prompt = format!(
            "Analyze this content and create a hierarchical mind map with ASCII tree format.\n\n\
             Requirements:\n\
             - Use ASCII tree structure with ├─, └─, and │ characters\n\
             - 3-4 levels of hierarchy\n\
             - 8-12 total nodes\n\
             - Be logical and clear\n\
             - Clean markdown/ASCII format\n\n\
             Content:\n{context}\n\n\
             Output format example:\n\
             ROOT TOPIC\n \
             ├─ Key Idea 1\n \
             │   ├─ Subpoint A\n \
             │   └─ Subpoint B\n \
             ├─ Key Idea 2\n \
             │   ├─ Subpoint C\n \
             │   └─ Subpoint D\n \
             └─ Conclusion\n\n\
             Output ONLY the mind map, no explanation."
        );
        self.chat.complete(&ChatRequest::user(prompt, 800)).await
    }

    /// Multiple-choice quiz questions.
    ///
    /// An unparseable reply gets exactly one retry; a second failure yields
    /// an empty quiz rather than an error.
    pub async fn quiz(&self, chunks: &[String], num_questions: usize) -> Result<Vec<QuizQuestion>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }
        let context = context_of(chunks, QUIZ_CHUNKS)?;
        let prompt = format!(
            "Generate {num_questions} multiple choice quiz questions based on this document.\n\
             Return ONLY valid JSON, no other text.\n\n\
             Document:\n{context}\n\n\
             JSON format (MUST be valid):\n\
             [\n  \
             {{\"question\": \"What is...\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"answer\": \"A\"}},\n  \
             {{\"question\": \"How does...\", \"options\": [\"A\", \"B\", \"C\", \"D\"], \"answer\": \"B\"}}\n\
             ]"
        );
        let request = ChatRequest {
            system: None,
            prompt,
            temperature: 0.5,
            max_tokens: 1500,
        };

        for attempt in 0..2 {
            let response = self.chat.complete(&request).await?;
            match try_parse_array::<QuizQuestion>(&response) {
                Ok(questions) if !questions.is_empty() => return Ok(questions),
                Ok(_) => log::warn!("Quiz generation returned an empty list (attempt {attempt})"),
                Err(e) => log::warn!("Failed to parse quiz response (attempt {attempt}): {e}"),
            }
        }
        Ok(Vec::new())
    }

    /// Question/answer flashcards; empty on unparseable output
    pub async fn flashcards(&self, chunks: &[String], num_cards: usize) -> Result<Vec<Flashcard>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }
        let context = context_of(chunks, FLASHCARD_CHUNKS)?;
        let prompt = format!(
            "Generate {num_cards} flashcard pairs (Q&A) from this document.\n\
             Return ONLY valid JSON, no other text.\n\n\
             Document:\n{context}\n\n\
             JSON format (MUST be valid):\n\
             [\n  \
             {{\"question\": \"What is...\", \"answer\": \"...\"}},\n  \
             {{\"question\": \"How does...\", \"answer\": \"...\"}}\n\
             ]"
        );

        let response = self.chat.complete(&ChatRequest::user(prompt, 1500)).await?;
        Ok(parse_or_empty(&response, "flashcards"))
    }

    /// Section titles forming a table of contents; empty on unparseable output
    pub async fn table_of_contents(&self, chunks: &[String]) -> Result<Vec<String>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }
        let context = context_of(chunks, TOC_CHUNKS)?;
        let prompt = format!(
            "Generate a table of contents with 5-8 main sections from this document.\n\
             Return as a JSON array of strings with section titles.\n\n\
             Document:\n{context}\n\n\
             Return ONLY valid JSON in this format:\n\
             [\"Section 1\", \"Section 2\", \"Section 3\"]"
        );

        let response = self.chat.complete(&ChatRequest::user(prompt, 300)).await?;
        Ok(parse_or_empty(&response, "table of contents"))
    }

    /// A conversational 2-3 minute narration script
    pub async fn audio_script(&self, chunks: &[String]) -> Result<String> {
        let context = context_of(chunks, AUDIO_CHUNKS)?;
        let prompt = format!(
            "Create a 2-3 minute audio script summarizing this document.\n\
             Make it conversational and engaging, as if explaining to a friend.\n\
             Include main points and key takeaways.\n\n\
             Document:\n{context}\n\n\
             Write the script directly without any formatting."
        );
        self.chat.complete(&ChatRequest::user(prompt, 600)).await
    }

    /// Generate a narration script and render it to MP3
    pub async fn audio_overview(
        &self,
        synthesizer: &dyn SpeechSynthesizer,
        chunks: &[String],
    ) -> Result<AudioOverview> {
        let script = self.audio_script(chunks).await?;
        let audio = synthesizer.synthesize(&script).await?;
        Ok(AudioOverview { script, audio })
    }
}

/// Join the leading `budget` chunks into one prompt context
fn context_of(chunks: &[String], budget: usize) -> Result<String> {
    if chunks.is_empty() {
        return Err(GenerationError::NoContent);
    }
    Ok(chunks
        .iter()
        .take(budget)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn parse_or_empty<T: serde::de::DeserializeOwned>(response: &str, what: &str) -> Vec<T> {
    match try_parse_array(response) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Failed to parse {what} response: {e}");
            Vec::new()
        }
    }
}
