use async_trait::async_trait;
use ruplan_core::{
    CreateProjectRequest, DeleteProjectResponse, ErrorResponse, LoginRequest, LoginResponse,
    Project, SignupRequest, SignupResponse,
};
use thiserror::Error;

/// Errori lato client: ognuno arriva all'utente come un singolo alert,
/// nessun retry e nessuna coda offline.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Campi del form non validi: nessuna chiamata HTTP viene fatta.
    #[error("{0}")]
    Validation(String),

    /// Il server ha risposto con un errore applicativo `{ "message": ... }`.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Errore di trasporto (rete, timeout, corpo non decodificabile).
    #[error("Something went wrong. Please try again.")]
    Transport(#[from] reqwest::Error),
}

/// Le cinque operazioni remote del tracker. Dietro un trait così il flusso di
/// sessione si collauda anche senza rete.
#[async_trait]
pub trait ProjectApi {
    async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse, ClientError>;
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ClientError>;
    async fn create_project(&self, req: &CreateProjectRequest) -> Result<Project, ClientError>;
    async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, ClientError>;
    async fn delete_project(&self, project_id: &str)
        -> Result<DeleteProjectResponse, ClientError>;
}

/// Client HTTP reale basato su reqwest.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Una risposta non-2xx diventa il messaggio di errore del server;
    /// se il corpo non è il solito `{ "message": ... }` si ripiega sul generico.
    async fn check<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            let message = resp
                .json::<ErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| "Something went wrong. Please try again.".to_string());
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ProjectApi for ApiClient {
    async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/signup", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::check(resp).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/login", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::check(resp).await
    }

    async fn create_project(&self, req: &CreateProjectRequest) -> Result<Project, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/projects", self.base_url))
            .json(req)
            .send()
            .await?;
        Self::check(resp).await
    }

    async fn list_projects(&self, user_id: &str) -> Result<Vec<Project>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/projects/{}", self.base_url, user_id))
            .send()
            .await?;
        Self::check(resp).await
    }

    async fn delete_project(
        &self,
        project_id: &str,
    ) -> Result<DeleteProjectResponse, ClientError> {
        let resp = self
            .http
            .delete(format!("{}/api/projects/{}", self.base_url, project_id))
            .send()
            .await?;
        Self::check(resp).await
    }
}
