use super::lobby::Lobby;
use super::lobby::Refusal;
use crate::gameroom::Remote;
use crate::protocol::Request;
use crate::protocol::Response;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use futures::StreamExt;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(lobby: Arc<Lobby>) -> Result<(), std::io::Error> {
        let state = web::Data::from(lobby);
        log::info!("starting table server on {}", Self::addr());
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/join", web::get().to(join))
        })
        .workers(4)
        .bind(Self::addr())?
        .run()
        .await
    }

    fn addr() -> String {
        std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:4000"))
    }
}

async fn join(lobby: web::Data<Lobby>, body: web::Payload, req: HttpRequest) -> HttpResponse {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            actix_web::rt::spawn(welcome(lobby, session, stream));
            response
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Per-connection lifecycle: the first frame names the player, the lobby
/// accepts or refuses, and an accepted session is bridged onto the room
/// channels until either side hangs up.
async fn welcome(
    lobby: web::Data<Lobby>,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) {
    let Some(name) = handshake(&mut stream).await else {
        let _ = session.close(None).await;
        return;
    };
    match lobby.admit(&name).await {
        Err(Refusal::Taken) => {
            log::info!("{} is already seated", name);
            let _ = session.text(Response::AlreadyConnected.to_json()).await;
            let _ = session.close(None).await;
        }
        Err(Refusal::Full) => {
            log::info!("{} turned away from a full table", name);
            let _ = session.text(Response::Full.to_json()).await;
            let _ = session.close(None).await;
        }
        Ok(remote) => {
            let _ = session.text(Response::Connected.to_json()).await;
            bridge(remote, &mut session, &mut stream).await;
            lobby.depart(&name).await;
            let _ = session.close(None).await;
            log::info!("{} disconnected", name);
        }
    }
}

/// Wait for the NAME frame. Anything else before it is logged and ignored.
async fn handshake(stream: &mut actix_ws::MessageStream) -> Option<String> {
    loop {
        match stream.next().await? {
            Ok(actix_ws::Message::Text(text)) => match serde_json::from_str(&text) {
                Ok(Request::Name(name)) => break Some(name),
                _ => log::warn!("expected a name, got: {}", text),
            },
            Ok(actix_ws::Message::Close(_)) | Err(_) => break None,
            _ => continue,
        }
    }
}

/// Pump frames both ways between the WebSocket session and the room-side
/// channels until either end closes.
async fn bridge(
    mut remote: Remote,
    session: &mut actix_ws::Session,
    stream: &mut actix_ws::MessageStream,
) {
    'sesh: loop {
        tokio::select! {
            biased;
            msg = remote.rx.recv() => match msg {
                Some(json) => if session.text(json).await.is_err() { break 'sesh },
                None => break 'sesh,
            },
            msg = stream.next() => match msg {
                Some(Ok(actix_ws::Message::Text(text))) => if remote.tx.send(text.to_string()).is_err() { break 'sesh },
                Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                Some(Err(_)) => break 'sesh,
                None => break 'sesh,
                _ => continue 'sesh,
            },
        }
    }
}
