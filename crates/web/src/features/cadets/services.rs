use sqlx::PgPool;
use storage::{
    dto::cadet::{CadetDetailResponse, CreateCadetRequest, UpdateCadetRequest},
    error::Result,
    models::Cadet,
    repository::cadet::CadetRepository,
};

/// List all cadets
pub async fn list_cadets(pool: &PgPool) -> Result<Vec<Cadet>> {
    let repo = CadetRepository::new(pool);
    repo.list().await
}

/// Search cadets by name or CAP id fragment
pub async fn search_cadets(pool: &PgPool, term: &str) -> Result<Vec<Cadet>> {
    let repo = CadetRepository::new(pool);
    repo.search(term).await
}

/// Get a cadet by CAP id
pub async fn get_cadet(pool: &PgPool, cap_id: i64) -> Result<Cadet> {
    let repo = CadetRepository::new(pool);
    repo.find_by_cap_id(cap_id).await
}

/// Get a cadet's full profile
pub async fn get_cadet_detailed(pool: &PgPool, cap_id: i64) -> Result<CadetDetailResponse> {
    let repo = CadetRepository::new(pool);
    repo.find_by_cap_id_detailed(cap_id).await
}

/// Register a new cadet
pub async fn create_cadet(pool: &PgPool, request: &CreateCadetRequest) -> Result<Cadet> {
    let repo = CadetRepository::new(pool);
    repo.create(request).await
}

/// Update a cadet
pub async fn update_cadet(
    pool: &PgPool,
    cap_id: i64,
    request: &UpdateCadetRequest,
) -> Result<Cadet> {
    let repo = CadetRepository::new(pool);
    repo.update(cap_id, request).await
}

/// Delete a cadet
pub async fn delete_cadet(pool: &PgPool, cap_id: i64) -> Result<()> {
    let repo = CadetRepository::new(pool);
    repo.delete(cap_id).await
}
