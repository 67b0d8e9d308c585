//! Pull request `list` web action.
//!
//! The action is wired to its host through three narrow collaborators:
//! [`ProjectLookup`] resolves the requested project, [`UserSession`] answers
//! permission questions for the caller, and [`ResponseWriter`] serializes
//! the response. Routing, persistence and sessions stay with the host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the mandatory project parameter.
pub const PROJECT_PARAM: &str = "project";

/// Errors raised while handling a web action.
#[derive(Error, Debug)]
pub enum ActionError {
    /// Required request parameter was not supplied
    #[error("The '{0}' parameter is missing")]
    MissingParameter(&'static str),

    /// Requested project does not exist
    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    /// Caller lacks every permission that grants access
    #[error("Insufficient privileges")]
    InsufficientPrivileges,

    /// Response could not be written
    #[error("Failed to write response: {0}")]
    Write(#[from] io::Error),
}

/// Permissions a user may hold on a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectPermission {
    /// Browse the project
    User,
    /// Run analyses against the project
    Scan,
}

/// Permissions a user may hold across the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalPermission {
    Scan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub key: String,
    pub name: String,
}

/// Finds projects by key.
pub trait ProjectLookup {
    fn find_project(&self, key: &str) -> Option<Project>;
}

/// Permission view of the authenticated caller.
pub trait UserSession {
    fn has_project_permission(&self, permission: ProjectPermission, project: &Project) -> bool;

    fn has_global_permission(&self, permission: GlobalPermission) -> bool;
}

/// Serializes a response body for the host.
pub trait ResponseWriter {
    fn write(&self, response: &PullRequestList) -> Result<(), ActionError>;
}

/// Incoming request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    params: HashMap<String, String>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the parameter value or fails when it is absent or blank.
    pub fn mandatory_param(&self, key: &'static str) -> Result<&str, ActionError> {
        self.param(key)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ActionError::MissingParameter(key))
    }
}

/// Declared shape of a web action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDefinition {
    pub key: &'static str,
    pub params: Vec<ParamDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDefinition {
    pub key: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub key: String,
    pub title: String,
    pub branch: String,
    pub base: String,
}

/// Body of the `list` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestList {
    pub pull_requests: Vec<PullRequest>,
}

/// Writes responses as JSON into an [`io::Write`] sink.
pub struct JsonResponseWriter<W> {
    sink: RefCell<W>,
}

impl<W: io::Write> JsonResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: RefCell::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: io::Write> ResponseWriter for JsonResponseWriter<W> {
    fn write(&self, response: &PullRequestList) -> Result<(), ActionError> {
        let mut sink = self.sink.borrow_mut();
        serde_json::to_writer(&mut *sink, response).map_err(io::Error::from)?;
        sink.flush()?;
        Ok(())
    }
}

/// Lists the pull requests of a project.
///
/// Pull request discovery belongs to the host, so a permitted caller
/// always receives an empty list.
pub struct ListAction<L, S, W> {
    projects: L,
    session: S,
    writer: W,
}

impl<L, S, W> ListAction<L, S, W>
where
    L: ProjectLookup,
    S: UserSession,
    W: ResponseWriter,
{
    pub fn new(projects: L, session: S, writer: W) -> Self {
        Self {
            projects,
            session,
            writer,
        }
    }

    pub fn define() -> ActionDefinition {
        ActionDefinition {
            key: "list",
            params: vec![ParamDefinition {
                key: PROJECT_PARAM,
                required: true,
            }],
        }
    }

    /// Handles one request.
    ///
    /// # Errors
    ///
    /// Returns error if the project parameter is missing, the project does
    /// not exist, the caller may not see the project, or the response cannot
    /// be written. Nothing is written on failure.
    pub fn handle(&self, request: &Request) -> Result<(), ActionError> {
        let key = request.mandatory_param(PROJECT_PARAM)?;
        let project = self
            .projects
            .find_project(key)
            .ok_or_else(|| ActionError::ProjectNotFound(key.to_string()))?;

        check_permission(&project, &self.session)?;

        debug!(project = %project.key, "listing pull requests");
        self.writer.write(&PullRequestList::default())
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

fn check_permission(project: &Project, session: &impl UserSession) -> Result<(), ActionError> {
    if session.has_project_permission(ProjectPermission::User, project)
        || session.has_project_permission(ProjectPermission::Scan, project)
        || session.has_global_permission(GlobalPermission::Scan)
    {
        return Ok(());
    }

    warn!(project = %project.key, "pull request listing denied");
    Err(ActionError::InsufficientPrivileges)
}
