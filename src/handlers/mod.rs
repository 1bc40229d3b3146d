// handlers/mod.rs - HTTP handlers
//
// beneficios: CRUD over the benefit collection (/api/beneficios/*)
// root:       service status and health (/api, /health)
pub mod beneficios;
pub mod root;
