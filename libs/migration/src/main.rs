use migration::Migrator;
use sea_orm_migration::cli;

/// Migration CLI. Reads `DATABASE_URL`; run `migration up`, `down`, `status`, `fresh`.
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
