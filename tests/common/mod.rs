//! Shared test doubles for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use aspnet_scaffolder::Result;
use aspnet_scaffolder::dispatch::{CommandInvocation, Dispatch};
use aspnet_scaffolder::prompt::{InputRequest, Notice, PickItem, Prompter};

/// One pre-recorded answer, consumed in order
#[derive(Debug, Clone)]
pub enum Answer {
    /// Free-text answer (`None` = dismissed)
    Text(Option<String>),
    /// Accept the pre-filled value
    Default,
    /// Single-select answer
    Pick(Option<usize>),
    /// Multi-select answer
    Many(Option<Vec<usize>>),
}

impl Answer {
    pub fn text(value: &str) -> Self {
        Answer::Text(Some(value.to_string()))
    }

    pub fn dismissed() -> Self {
        Answer::Text(None)
    }
}

/// Prompter that replays scripted answers and records what it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    pub inputs: Mutex<Vec<InputRequest>>,
    pub pick_lists: Mutex<Vec<Vec<PickItem>>>,
    pub notices: Mutex<Vec<Notice>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            ..Default::default()
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn input_titles(&self) -> Vec<String> {
        self.inputs
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.title.clone())
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self) -> Answer {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("prompt asked with no scripted answer left")
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn pick_one(&self, _title: &str, items: &[PickItem]) -> Result<Option<usize>> {
        self.pick_lists.lock().unwrap().push(items.to_vec());
        match self.next() {
            Answer::Pick(choice) => Ok(choice),
            other => panic!("expected a pick answer, got {:?}", other),
        }
    }

    async fn pick_many(&self, _title: &str, _items: &[String]) -> Result<Option<Vec<usize>>> {
        match self.next() {
            Answer::Many(choice) => Ok(choice),
            other => panic!("expected a multi-pick answer, got {:?}", other),
        }
    }

    async fn input(&self, request: &InputRequest) -> Result<Option<String>> {
        self.inputs.lock().unwrap().push(request.clone());
        match self.next() {
            Answer::Text(value) => Ok(value),
            Answer::Default => Ok(Some(request.default.clone())),
            other => panic!("expected a text answer, got {:?}", other),
        }
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Dispatcher that only records what it was given
#[derive(Default)]
pub struct RecordingDispatcher {
    pub dispatched: Mutex<Vec<CommandInvocation>>,
}

impl RecordingDispatcher {
    pub fn dispatched(&self) -> Vec<CommandInvocation> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatch for RecordingDispatcher {
    async fn dispatch(&self, invocation: &CommandInvocation) -> Result<()> {
        self.dispatched.lock().unwrap().push(invocation.clone());
        Ok(())
    }
}

/// Workspace with the given project files (relative paths) created on disk
pub fn workspace(projects: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    let paths = projects
        .iter()
        .map(|relative| {
            let path = root.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "<Project Sdk=\"Microsoft.NET.Sdk.Web\" />").unwrap();
            path
        })
        .collect();

    (temp_dir, paths)
}

/// Canonical workspace root for a temp dir
pub fn root(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().canonicalize().unwrap()
}

pub fn parent(path: &Path) -> PathBuf {
    path.parent().unwrap().to_path_buf()
}
