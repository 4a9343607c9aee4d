fn main() -> std::io::Result<()> {
    madoguchi_core::presentation::http::openapi::write_openapi_snapshot()
}
