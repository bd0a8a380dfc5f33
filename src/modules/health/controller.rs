#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is up", body = String)),
    tag = "Health"
)]
pub async fn root() -> &'static str {
    "Thrift store server is running"
}
