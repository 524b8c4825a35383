use ruplan_core::{CreateProjectRequest, LoginRequest, Project, SignupRequest, User};

use crate::api::{ClientError, ProjectApi};
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Modalità del form credenziali (la schermata non autenticata è una sola,
/// con il toggle login/signup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Login,
    Signup,
}

/// Stato della sessione: macchina a due stati, transizioni nominate
/// submit-success e logout. Niente flag sparsi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(User),
}

/// Campi del form credenziali; name è usato solo in modalità Signup.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Esito di un submit andato a buon fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Login riuscito: sessione persistita e progetti caricati.
    LoggedIn,
    /// Registrazione riuscita: si resta non autenticati, la modalità passa a
    /// Login e il form deve svuotare il campo password.
    Registered,
}

/// Flusso di sessione del client: tiene insieme stato, storage durevole e API
/// remote. Ogni operazione è una singola chiamata HTTP, senza retry.
pub struct SessionFlow<S: KeyValueStore, A: ProjectApi> {
    state: SessionState,
    mode: Mode,
    projects: Vec<Project>,
    store: S,
    api: A,
}

impl<S: KeyValueStore, A: ProjectApi> SessionFlow<S, A> {
    pub fn new(store: S, api: A) -> Self {
        Self {
            state: SessionState::Unauthenticated,
            // la prima schermata proposta è la registrazione
            mode: Mode::Signup,
            projects: Vec::new(),
            store,
            api,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// "Già registrato? Login" / "Nessun account? Signup"
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Login => Mode::Signup,
            Mode::Signup => Mode::Login,
        };
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    /// All'avvio: ripristina la sessione dallo storage durevole. Se token e
    /// utente sono entrambi presenti si passa direttamente ad Authenticated e
    /// si carica la lista progetti: una sola chiamata List, nessun login.
    /// Ritorna true se la sessione è stata ripristinata.
    pub async fn restore(&mut self) -> bool {
        let token = self.store.get(TOKEN_KEY);
        let user_json = self.store.get(USER_KEY);
        let (Some(_token), Some(user_json)) = (token, user_json) else {
            return false;
        };
        let Ok(user) = serde_json::from_str::<User>(&user_json) else {
            // sessione salvata illeggibile: vale come assente
            return false;
        };
        let user_id = user.user_id.clone();
        self.state = SessionState::Authenticated(user);
        // un List fallito lascia la lista vuota, la sessione resta valida
        if let Ok(list) = self.api.list_projects(&user_id).await {
            self.projects = list;
        }
        true
    }

    /// Validazione del form, prima di qualsiasi chiamata HTTP.
    fn validate(&self, creds: &Credentials) -> Result<(), ClientError> {
        if creds.email.is_empty() || creds.password.is_empty() {
            return Err(ClientError::Validation(
                "Please fill in all required fields.".to_string(),
            ));
        }
        if creds.password.len() < 6 {
            return Err(ClientError::Validation(
                "Password must be at least 6 characters long.".to_string(),
            ));
        }
        if self.mode == Mode::Signup && creds.name.is_empty() {
            return Err(ClientError::Validation(
                "Please enter your full name for signup.".to_string(),
            ));
        }
        Ok(())
    }

    /// Submit del form credenziali nella modalità corrente.
    pub async fn submit(&mut self, creds: &Credentials) -> Result<SubmitOutcome, ClientError> {
        self.validate(creds)?;
        match self.mode {
            Mode::Login => {
                let resp = self
                    .api
                    .login(&LoginRequest {
                        email: creds.email.clone(),
                        password: creds.password.clone(),
                    })
                    .await?;
                // transizione submit-success: persisti la sessione, poi List
                self.store.set(TOKEN_KEY, &resp.token);
                if let Ok(user_json) = serde_json::to_string(&resp.user) {
                    self.store.set(USER_KEY, &user_json);
                }
                let user_id = resp.user.user_id.clone();
                self.state = SessionState::Authenticated(resp.user);
                if let Ok(list) = self.api.list_projects(&user_id).await {
                    self.projects = list;
                }
                Ok(SubmitOutcome::LoggedIn)
            }
            Mode::Signup => {
                self.api
                    .signup(&SignupRequest {
                        name: creds.name.clone(),
                        email: creds.email.clone(),
                        password: creds.password.clone(),
                    })
                    .await?;
                // niente auto-login: si passa alla schermata di login
                self.mode = Mode::Login;
                Ok(SubmitOutcome::Registered)
            }
        }
    }

    /// Aggiunge un progetto: titolo obbligatorio lato client; il record
    /// restituito dal server viene accodato alla lista in memoria.
    pub async fn add_project(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<Project, ClientError> {
        if title.is_empty() {
            return Err(ClientError::Validation("Title is required!".to_string()));
        }
        let user = self
            .current_user()
            .ok_or_else(|| ClientError::Validation("Please login first.".to_string()))?;
        let req = CreateProjectRequest {
            user_id: user.user_id.clone(),
            title: title.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        };
        let created = self.api.create_project(&req).await?;
        self.projects.push(created.clone());
        Ok(created)
    }

    /// Cancella un progetto: alla risposta del server l'id viene tolto dalla
    /// lista in memoria, qualunque cosa dica il riscontro.
    pub async fn delete_project(&mut self, project_id: &str) -> Result<(), ClientError> {
        self.api.delete_project(project_id).await?;
        self.projects.retain(|p| p.project_id != project_id);
        Ok(())
    }

    /// Transizione logout: svuota lo storage durevole e torna Unauthenticated.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state = SessionState::Unauthenticated;
        self.projects.clear();
    }
}
