//! Scripted provider stubs shared by scoring tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::errors::ProviderError;
use crate::llm_client::{GenerationOptions, GenerationProvider, GenerationResult};

/// Generation stub that replays a fixed script of responses and records the
/// prompts it was called with. Errors once the script runs out, which doubles
/// as a provider-failure stub when constructed with an empty script.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationProvider for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<GenerationResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(text) => Ok(GenerationResult::from_text(&text)),
            None => Err(ProviderError::EmptyContent),
        }
    }
}

/// Embedding stub replaying fixed vectors in call order. Errors when
/// exhausted.
pub struct ScriptedEmbedder {
    vectors: Mutex<VecDeque<Vec<f32>>>,
    calls: AtomicUsize,
}

impl ScriptedEmbedder {
    pub fn new(vectors: Vec<Vec<f32>>) -> Self {
        Self {
            vectors: Mutex::new(vectors.into_iter().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Unit vector whose cosine similarity against `[1, 0]` equals `target`.
    pub fn unit_vector_with_cosine(target: f32) -> Vec<f32> {
        vec![target, (1.0 - target * target).sqrt()]
    }
}

#[async_trait]
impl EmbeddingProvider for ScriptedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.vectors.lock().unwrap().pop_front() {
            Some(vector) => Ok(vector),
            None => Err(ProviderError::EmptyContent),
        }
    }
}
