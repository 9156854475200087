// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! Oneline backend entrypoint.
//!
//! Serves the diagram persistence API at `http://127.0.0.1:<port>/api/diagram`,
//! backed by a `diagram.json` record under the data directory.

use std::error::Error;
use std::sync::Arc;

const DEFAULT_HTTP_PORT: u16 = 4400;
const DEFAULT_DATA_DIR: &str = "data";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--port <port>] [--durable-writes]\n  {program} [--data <dir>] [--port <port>] [--durable-writes]\n\nServes the diagram API at `http://127.0.0.1:<port>/api/diagram`.\n--port selects the port (0 = ephemeral; default {DEFAULT_HTTP_PORT}).\n\nIf data-dir/--data is omitted, `{DEFAULT_DATA_DIR}` under the current working directory is used.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_dir: Option<String>,
    port: Option<u16>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.data_dir = Some(dir);
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "oneline".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let dir = options.data_dir.unwrap_or_else(|| DEFAULT_DATA_DIR.to_owned());
        let store = if options.durable_writes {
            oneline::store::DiagramFile::new(dir)
                .with_durability(oneline::store::WriteDurability::Durable)
        } else {
            oneline::store::DiagramFile::new(dir)
        };
        store.ensure_exists()?;

        let port = options.port.unwrap_or(DEFAULT_HTTP_PORT);
        let router = oneline::server::router(Arc::new(store));

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            println!("oneline: listening on http://{}", listener.local_addr()?);
            axum::serve(listener, router).await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("oneline: {err}");
        std::process::exit(1);
    }
}
