/*!
 * Provider implementations for different text-generation services.
 *
 * This module contains client implementations for the LLM providers the
 * lemmatizer can talk to:
 * - Ollama: Local LLM server
 * - OpenAI: OpenAI API integration (also used for LM Studio)
 * - Anthropic: Anthropic API integration
 *
 * The clients share a request/response shape: a builder-style request type,
 * an async `complete` call and a static `extract_text_from_response` helper.
 * The `Lemmatizer` trait in `crate::lemmatizer` is the seam callers depend
 * on; these clients are its transport layer.
 */

pub mod ollama;
pub mod openai;
pub mod anthropic;
