use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use ruplan_core::{
    new_id, now_timestamp, CreateProjectRequest, DeleteProjectResponse, LoginRequest,
    LoginResponse, Project, SignupRequest, SignupResponse, User,
};
use sqlx::Row;
use std::sync::Arc;

use crate::auth;
use crate::error::ApiError;
use crate::AppState;

/// Handler per POST /api/signup
pub async fn signup(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    // controllo minimo lato server: tutti e tre i campi devono esserci
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::MissingFields);
    }

    // controllo se l'email esiste già:
    // query_scalar esegue una query mappata su un singolo valore concreto
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(&req.email)
        .fetch_one(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    if existing > 0 {
        /* l'unicità dell'email va garantita prima dell'insert */
        return Err(ApiError::DuplicateEmail);
    }

    // genera id utente e hash salato della password (work factor fisso)
    let user_id = new_id();
    let password_hash = auth::hash_password(&req.password)
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    let created_at = now_timestamp();

    // inserisci
    sqlx::query(
        "INSERT INTO users (user_id, name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user_id)
    .bind(&req.name)
    .bind(&req.email)
    .bind(&password_hash)
    .bind(&created_at)
    .execute(&state.pool)
    .await
    .map_err(|e| ApiError::internal("Internal Server Error", e))?;

    /* nessun token alla registrazione: l'utente farà login a parte */
    let resp = SignupResponse {
        message: "User registered successfully!".to_string(),
    };
    Ok((StatusCode::CREATED, Json(resp)))
}

/// Handler per POST /api/login
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // cerca utente per email
    let row = sqlx::query("SELECT user_id, name, password_hash FROM users WHERE email = ?")
        .bind(&req.email)
        .fetch_optional(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    let row = match row {
        Some(r) => r,
        /* nessun utente registrato con quella email */
        None => return Err(ApiError::UserNotFound),
    };
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    let stored_hash: String = row
        .try_get("password_hash")
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;

    // verifica della password fornita contro l'hash salvato
    let matches = auth::verify_password(&req.password, &stored_hash)
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;
    if !matches {
        /* hash diverso: credenziali non valide */
        return Err(ApiError::WrongPassword);
    }

    // emette un token firmato, valido 1 ora, con la sola identità come claim
    let token = auth::issue_token(&user_id)
        .map_err(|e| ApiError::internal("Internal Server Error", e))?;

    let user = User {
        user_id,
        name,
        email: req.email.clone(),
    };
    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        token,
        user,
    }))
}

/// Handler per POST /api/projects
pub async fn create_project(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    /* il titolo vuoto è accettato: la validazione del titolo sta solo lato
    client, e l'id del proprietario arriva dal body senza verifiche */
    let project_id = new_id();

    sqlx::query("INSERT INTO projects (project_id, user_id, title, description) VALUES (?, ?, ?, ?)")
        .bind(&project_id)
        .bind(&req.user_id)
        .bind(&req.title)
        .bind(&req.description)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Error adding project", e))?;

    // risponde con il record così come è stato salvato, id generato compreso
    Ok(Json(Project {
        project_id,
        user_id: req.user_id,
        title: req.title,
        description: req.description,
    }))
}

/// Handler per GET /api/projects/:id (il segmento è l'id del proprietario)
pub async fn list_projects(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Project>>, ApiError> {
    // nessun ORDER BY: l'ordine è quello di memorizzazione, non garantito
    let rows =
        sqlx::query("SELECT project_id, user_id, title, description FROM projects WHERE user_id = ?")
            .bind(&user_id)
            .fetch_all(&state.pool)
            .await
            .map_err(|e| ApiError::internal("Error fetching projects", e))?;

    let mut projects = Vec::with_capacity(rows.len());
    for row in rows {
        projects.push(Project {
            project_id: row
                .try_get("project_id")
                .map_err(|e| ApiError::internal("Error fetching projects", e))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| ApiError::internal("Error fetching projects", e))?,
            title: row
                .try_get("title")
                .map_err(|e| ApiError::internal("Error fetching projects", e))?,
            description: row
                .try_get("description")
                .map_err(|e| ApiError::internal("Error fetching projects", e))?,
        });
    }
    Ok(Json(projects))
}

/// Handler per DELETE /api/projects/:id
pub async fn delete_project(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProjectResponse>, ApiError> {
    // cancellazione per id senza controllo di esistenza: risponde 200 comunque
    sqlx::query("DELETE FROM projects WHERE project_id = ?")
        .bind(&id)
        .execute(&state.pool)
        .await
        .map_err(|e| ApiError::internal("Error deleting project", e))?;

    Ok(Json(DeleteProjectResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
