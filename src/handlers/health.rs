/// GET /health -> liveness only; the database is not contacted.
pub async fn healthcheck() -> &'static str {
    "ok"
}
