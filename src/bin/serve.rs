use bevy::{log::LogPlugin, prelude::*};
use std::{
    env,
    io::{BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
};

use webflight::{
    resources::SimulationConfig,
    server::{Command, FlightSimulation, Response},
};

/// Resource holding the client connection.
#[derive(Resource)]
struct ServerState {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting flight dynamics server...");

    // Optional simulation config as the first argument
    let config = match env::args().nth(1) {
        Some(path) => {
            println!("Loading config from {}", path);
            SimulationConfig::load(&path)?
        }
        None => SimulationConfig::default(),
    };
    let simulation = FlightSimulation::from_config(&config)?;

    // Start TCP server
    let listener = TcpListener::bind("127.0.0.1:0")?;
    println!("PORT={}", listener.local_addr()?.port());

    // Accept one connection
    let (stream, addr) = listener.accept()?;
    println!("Client connected from {}", addr);

    let server = ServerState {
        reader: BufReader::new(stream.try_clone()?),
        writer: stream,
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(simulation)
        .insert_resource(server)
        .add_systems(Update, handle_commands);

    app.run();

    Ok(())
}

/// Reads one JSON command per line and writes one JSON response per line.
fn handle_commands(
    mut server: ResMut<ServerState>,
    mut simulation: ResMut<FlightSimulation>,
    mut exit: EventWriter<AppExit>,
) {
    let mut line = String::new();
    match server.reader.read_line(&mut line) {
        Ok(0) => {
            info!("Client disconnected");
            exit.send(AppExit::Success);
            return;
        }
        Ok(_) => {}
        Err(e) => {
            error!("Error reading command: {}", e);
            exit.send(AppExit::error());
            return;
        }
    }

    let line = line.trim();
    if line.is_empty() {
        return;
    }

    let (response, close) = match serde_json::from_str::<Command>(line) {
        Ok(cmd) => {
            let close = matches!(cmd, Command::Close);
            (simulation.handle_command(cmd), close)
        }
        Err(e) => {
            error!("Failed to parse command: {}", e);
            (Response::error(format!("Invalid command format: {}", e)), false)
        }
    };

    if let Err(e) = send_response(&mut server.writer, &response) {
        error!("Failed to send response: {}", e);
        exit.send(AppExit::error());
        return;
    }

    if close {
        info!("Close command received");
        exit.send(AppExit::Success);
    }
}

fn send_response(stream: &mut TcpStream, response: &Response) -> std::io::Result<()> {
    let response_str = serde_json::to_string(response)? + "\n";
    stream.write_all(response_str.as_bytes())?;
    stream.flush()
}
