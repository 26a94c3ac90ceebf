//! VoucherBot Telegram Bot
//!
//! Main application entry point

use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info, warn};

use VoucherBot::{
    config::Settings,
    database::{create_pool, run_migrations},
    handlers::{
        commands::{self, Command},
        messages::{handle_left_chat_member, handle_message, handle_new_chat_member},
    },
    health,
    services::ServiceFactory,
    store::{MemberDirectory, PostgresMemberDirectory, PostgresRecordStore, RecordStore},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file appender alive
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting VoucherBot Telegram Bot...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&settings.database).await?;
    run_migrations(&db_pool).await?;

    // Initialize stores over the shared pool
    let store: Arc<dyn RecordStore> = Arc::new(PostgresRecordStore::new(db_pool.clone()));
    let directory: Arc<dyn MemberDirectory> = Arc::new(PostgresMemberDirectory::new(db_pool));

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings, store, directory);

    // Start the liveness endpoint alongside the dispatcher
    let probe_addr: SocketAddr =
        format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tokio::spawn(async move {
        if let Err(e) = health::serve(probe_addr).await {
            error!(error = %e, "Health endpoint terminated");
        }
    });

    info!("Setting up bot handlers...");

    // Wrap services in Arc for dependency injection
    let services_arc = Arc::new(services);

    // Create the handler
    let handler = create_handler();

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("VoucherBot is ready!");
    info!("Starting bot with polling mode...");

    dispatcher.dispatch().await;

    info!("VoucherBot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle dot-commands parsed out of message text
                dptree::filter_map(|msg: Message| {
                    msg.text().and_then(commands::parse_command)
                })
                .endpoint(handle_commands),
            )
            .branch(
                // Handle new chat members
                dptree::filter(|msg: Message| msg.new_chat_members().is_some())
                    .endpoint(handle_new_members),
            )
            .branch(
                // Handle departed chat members
                dptree::filter(|msg: Message| msg.left_chat_member().is_some())
                    .endpoint(handle_left_members),
            )
            .branch(
                // Handle regular messages
                dptree::endpoint(handle_messages),
            ),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = commands::handle_command(bot, msg, cmd, services).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, services: Arc<ServiceFactory>) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handle_message(bot, msg, services).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle new chat members
async fn handle_new_members(bot: Bot, msg: Message, services: Arc<ServiceFactory>) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handle_new_chat_member(bot, msg, services).await {
        error!(error = %e, "Error handling new chat member");
        return Err(e.into());
    }

    Ok(())
}

/// Handle departed chat members
async fn handle_left_members(bot: Bot, msg: Message, services: Arc<ServiceFactory>) -> HandlerResult {
    let services = (*services).clone();

    if let Err(e) = handle_left_chat_member(bot, msg, services).await {
        error!(error = %e, "Error handling left chat member");
        return Err(e.into());
    }

    Ok(())
}
