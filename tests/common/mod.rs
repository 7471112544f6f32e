#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use reqwest::StatusCode;

use course_ai_server::api::{self, AppState};
use course_ai_server::courses::{Course, CourseModule, InMemoryCourseRepository, Lesson};
use course_ai_server::error::{Error, Result};
use course_ai_server::generation::TextGenerator;
use course_ai_server::inference::{InferenceClient, QuestionAnswer};
use course_ai_server::security::ApiKeyAuth;

pub const OWNER_KEY: &str = "owner-key";
pub const OWNER_ID: &str = "user-owner";
pub const STRANGER_KEY: &str = "stranger-key";
pub const STRANGER_ID: &str = "user-stranger";

/// How the scripted client answers question-answering calls.
#[derive(Debug, Clone)]
pub enum Script {
    Answer(String),
    Fail,
}

/// Inference test double that records every call.
#[derive(Debug)]
pub struct ScriptedInferenceClient {
    script: Script,
    qa_calls: AtomicUsize,
    embedding_calls: AtomicUsize,
}

impl ScriptedInferenceClient {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            qa_calls: AtomicUsize::new(0),
            embedding_calls: AtomicUsize::new(0),
        })
    }

    pub fn total_calls(&self) -> usize {
        self.qa_calls.load(Ordering::SeqCst) + self.embedding_calls.load(Ordering::SeqCst)
    }

    pub fn qa_calls(&self) -> usize {
        self.qa_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceClient for ScriptedInferenceClient {
    async fn question_answering(&self, _question: &str, _context: &str) -> Result<QuestionAnswer> {
        self.qa_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Answer(answer) => Ok(QuestionAnswer {
                answer: answer.clone(),
                score: 0.5,
                start: 0,
                end: answer.len(),
            }),
            Script::Fail => Err(Error::api(StatusCode::SERVICE_UNAVAILABLE, "Model is loading")),
        }
    }

    async fn feature_extraction(&self, _input: &str) -> Result<Vec<f32>> {
        self.embedding_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Answer(_) => Ok(vec![0.0; 384]),
            Script::Fail => Err(Error::api(StatusCode::SERVICE_UNAVAILABLE, "Model is loading")),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: "course-with-lesson".to_string(),
            user: OWNER_ID.to_string(),
            title: "Rust Fundamentals".to_string(),
            description: "Learn Rust".to_string(),
            modules: vec![CourseModule {
                title: "Getting Started".to_string(),
                description: String::new(),
                lessons: vec![Lesson {
                    title: "Ownership".to_string(),
                    content: "Moves, borrows and lifetimes".to_string(),
                }],
            }],
        },
        Course {
            id: "course-without-modules".to_string(),
            user: OWNER_ID.to_string(),
            title: "Empty".to_string(),
            description: String::new(),
            modules: vec![],
        },
    ]
}

pub fn test_state(client: Option<Arc<dyn InferenceClient>>) -> AppState {
    let keys = HashMap::from([
        (OWNER_KEY.to_string(), OWNER_ID.to_string()),
        (STRANGER_KEY.to_string(), STRANGER_ID.to_string()),
    ]);

    AppState::new(
        TextGenerator::new(client),
        Arc::new(InMemoryCourseRepository::with_courses(sample_courses())),
        ApiKeyAuth::new(keys),
    )
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });

    format!("http://{addr}")
}

pub async fn spawn_app(client: Option<Arc<dyn InferenceClient>>) -> String {
    spawn_router(api::router(test_state(client))).await
}
