// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - PostgreSQL connection pool and schema setup
// - Optional demo data seeding
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use invoice_crm::config::ServerConfig;
    use invoice_crm::fixtures;
    use invoice_crm::web_app::api::db::{self, Database};
    use invoice_crm::web_app::app::App as WebApp;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use tracing_subscriber::EnvFilter;

    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().map_err(io_error)?;

    // Create PostgreSQL connection pool
    let pool = db::create_pool(&config.database_url, config.max_connections)
        .await
        .map_err(io_error)?;

    tracing::info!(
        "Connected to database (max {} connections, schema '{}')",
        config.max_connections,
        config.schema
    );

    fixtures::install(&pool, &config.schema).await.map_err(io_error)?;

    if config.seed_demo_data {
        if let Err(e) = seed_database(&pool, &config.schema).await {
            tracing::error!("Failed to seed database: {}", e);
        }
    }

    let database = Database::new(pool, config.schema.clone());

    // Initialize global handle for server functions
    db::init_db(database.clone());

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).map_err(io_error)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Share the database handle with server functions
            .app_data(web::Data::new(database.clone()))
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp/>
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
fn io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

/// Number of random invoices added on top of the sample data
#[cfg(feature = "ssr")]
const DEMO_INVOICE_COUNT: usize = 40;

/// Loads the sample customers and invoices plus random invoices, but only
/// into an empty database
#[cfg(feature = "ssr")]
async fn seed_database(pool: &sqlx::PgPool, schema: &str) -> anyhow::Result<()> {
    use invoice_crm::fixtures::{self, demo};
    use invoice_crm::web_app::api::invoices;

    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}.customers", schema))
        .fetch_one(pool)
        .await?;

    if count.0 > 0 {
        tracing::info!("Database already contains {} customers, skipping seed.", count.0);
        return Ok(());
    }

    tracing::info!("Seeding schema '{}' with demo data...", schema);
    fixtures::load_sample_data(pool, schema).await?;

    let customer_ids: Vec<i32> = sqlx::query_scalar(&format!("SELECT id FROM {}.customers ORDER BY id", schema))
        .fetch_all(pool)
        .await?;

    let now = chrono::Local::now().naive_local();
    for payload in demo::random_invoices(&customer_ids, DEMO_INVOICE_COUNT, now) {
        invoices::create_invoice(pool, schema, payload).await?;
    }

    tracing::info!("Database seeded successfully.");
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
