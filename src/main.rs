//! The `marks-api` server binary.

/*
 * marks-api - an HTTP API for student records.
 * Copyright (C) 2025  The marks-api contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use {
	color_eyre::{
		Section,
		eyre::{self, WrapErr},
	},
	marks_api::{database::ConnectionPool, server, signals, students::PgStudentStore},
	tokio::net::TcpListener,
};

mod cli;
mod config;
mod runtime;
mod telemetry;

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	match dotenvy::dotenv() {
		Ok(_) => {},
		Err(err) if err.not_found() => {},
		Err(err) => return Err(err).wrap_err("failed to load `.env` file"),
	}

	let args = cli::args();
	let mut config = config::Config::load(args.config_path.as_deref())?;
	args.apply_to_config(&mut config);

	let _guard = telemetry::init(&config.tracing).wrap_err("failed to initialize tracing")?;

	runtime::panic_hook::install();

	tracing::debug!(?config, "loaded configuration");

	config
		.runtime
		.build()
		.wrap_err("failed to build tokio runtime")?
		.block_on(run(config))
}

async fn run(config: config::Config) -> eyre::Result<()>
{
	let database_url = config.database.url().wrap_err("invalid database configuration")?;
	let pool = ConnectionPool::new(config.database.connect_options(&database_url))
		.await
		.wrap_err("failed to connect to database")
		.suggestion("check `DATABASE_URL` / `DB_*` or the `[database]` section of your config")?;

	let router = marks_api::http::router(PgStudentStore::new(pool.clone()))
		.allowed_origins(config.http.cors.allowed_origins.to_vec())
		.include_http_headers(config.tracing.include_http_headers)
		.build();

	let socket_addr = config.http.socket_addr();
	let listener = TcpListener::bind(socket_addr)
		.await
		.wrap_err_with(|| format!("failed to bind to {socket_addr}"))?;

	let addr = listener.local_addr().wrap_err("failed to get local address")?;

	tracing::info!(%addr, "listening for HTTP requests");

	server::run(listener, router, signals::shutdown(), config.http.shutdown_timeout)
		.await
		.wrap_err("failed to run HTTP server")?;

	tracing::info!("closing database connections");
	pool.close().await;

	Ok(())
}
