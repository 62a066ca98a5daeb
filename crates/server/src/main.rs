use klondike_core::{GameRegistry, GameSnapshot, GameSummary, PileId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tiny_http::{Header, Method, Response, Server, StatusCode};

fn main() {
    let server = Server::http("0.0.0.0:7878").expect("start server");
    println!("Klondike server on http://localhost:7878");
    let registry = Arc::new(GameRegistry::new());
    for request in server.incoming_requests() {
        let registry = registry.clone();
        if let Err(err) = handle_request(request, registry) {
            eprintln!("request error: {err}");
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum ApiErrorKind {
    InvalidMove,
    UnknownGame,
    MalformedRequest,
}

#[derive(Serialize)]
struct ApiError {
    success: bool,
    error: ApiErrorKind,
    message: String,
}

impl ApiError {
    fn new(error: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct MoveResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(flatten)]
    state: GameSnapshot,
}

#[derive(Serialize)]
struct DrawResponse {
    stock: usize,
    waste: Vec<klondike_core::Card>,
}

#[derive(Serialize)]
struct ListGamesResponse {
    games: Vec<GameSummary>,
    recent: Vec<String>,
}

#[derive(Serialize)]
struct DeleteGameResponse {
    success: bool,
}

#[derive(Debug, Deserialize)]
struct GameRef {
    game_id: String,
}

#[derive(Deserialize)]
struct MoveCardRequest {
    game_id: String,
    from_pile: String,
    to_pile: String,
    #[serde(default)]
    card_index: usize,
}

fn handle_request(
    mut request: tiny_http::Request,
    registry: Arc<GameRegistry>,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = request.url().to_string();
    let method = request.method().clone();
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    match (&method, url.as_str()) {
        (&Method::Post, "/new_game") => {
            let (_, game) = registry.create();
            let snapshot = GameSnapshot::of(&game.lock().unwrap());
            respond_json(request, &snapshot)
        }
        (&Method::Post, "/draw_card") => match parse_body::<GameRef>(&body) {
            Ok(req) => match registry.get(&req.game_id) {
                Some(game) => {
                    let mut game = game.lock().unwrap();
                    match game.draw_from_stock() {
                        Ok(()) => {
                            let response = DrawResponse {
                                stock: game.stock.len(),
                                waste: game.waste.cards.clone(),
                            };
                            respond_json(request, &response)
                        }
                        Err(err) => respond_json(
                            request,
                            &ApiError::new(ApiErrorKind::InvalidMove, err.to_string()),
                        ),
                    }
                }
                None => respond_json(request, &unknown_game(&req.game_id)),
            },
            Err(err) => respond_json(request, &err),
        },
        (&Method::Post, "/move_card") => match parse_body::<MoveCardRequest>(&body) {
            Ok(req) => handle_move(request, &registry, req),
            Err(err) => respond_json(request, &err),
        },
        (&Method::Post, "/get_game_state") => match parse_body::<GameRef>(&body) {
            Ok(req) => match registry.get(&req.game_id) {
                Some(game) => {
                    let snapshot = GameSnapshot::of(&game.lock().unwrap());
                    respond_json(request, &snapshot)
                }
                None => respond_json(request, &unknown_game(&req.game_id)),
            },
            Err(err) => respond_json(request, &err),
        },
        (&Method::Post, "/list_games") => {
            let response = ListGamesResponse {
                games: registry.summaries(),
                recent: registry.recent(5),
            };
            respond_json(request, &response)
        }
        (&Method::Post, "/delete_game") => match parse_body::<GameRef>(&body) {
            Ok(req) => {
                let response = DeleteGameResponse {
                    success: registry.delete(&req.game_id),
                };
                respond_json(request, &response)
            }
            Err(err) => respond_json(request, &err),
        },
        _ => {
            request.respond(Response::empty(StatusCode(404)))?;
            Ok(())
        }
    }
}

fn handle_move(
    request: tiny_http::Request,
    registry: &GameRegistry,
    req: MoveCardRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let (from, to) = match (req.from_pile.parse::<PileId>(), req.to_pile.parse::<PileId>()) {
        (Ok(from), Ok(to)) => (from, to),
        _ => {
            let err = ApiError::new(
                ApiErrorKind::MalformedRequest,
                format!("unknown pile in {:?} -> {:?}", req.from_pile, req.to_pile),
            );
            return respond_json(request, &err);
        }
    };
    let Some(game) = registry.get(&req.game_id) else {
        return respond_json(request, &unknown_game(&req.game_id));
    };
    let mut game = game.lock().unwrap();
    // An illegal move is a report, not a failure: the state comes back unchanged.
    let response = match game.move_cards(from, to, req.card_index) {
        Ok(_) => MoveResponse {
            success: true,
            error: None,
            message: None,
            state: GameSnapshot::of(&game),
        },
        Err(err) => MoveResponse {
            success: false,
            error: Some(ApiErrorKind::InvalidMove),
            message: Some(err.to_string()),
            state: GameSnapshot::of(&game),
        },
    };
    respond_json(request, &response)
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, ApiError> {
    serde_json::from_str(body)
        .map_err(|err| ApiError::new(ApiErrorKind::MalformedRequest, err.to_string()))
}

fn unknown_game(game_id: &str) -> ApiError {
    ApiError::new(
        ApiErrorKind::UnknownGame,
        format!("no game {game_id}; start a new game"),
    )
}

/// Serializes the payload and ends the request with it. The request is taken
/// by value: `tiny_http::Request::respond` consumes it, and every route ends
/// its request exactly once.
fn respond_json<T: Serialize>(
    request: tiny_http::Request,
    payload: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::to_vec(payload)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| "content-type header")?;
    request.respond(Response::from_data(body).with_header(header))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use klondike_core::Game;

    #[test]
    fn api_errors_use_snake_case_kinds() {
        let err = ApiError::new(ApiErrorKind::MalformedRequest, "bad body");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["success"], serde_json::json!(false));
        assert_eq!(value["error"], serde_json::json!("malformed_request"));
    }

    #[test]
    fn unknown_game_points_at_a_new_game() {
        let value = serde_json::to_value(unknown_game("feedbeef")).unwrap();
        assert_eq!(value["error"], serde_json::json!("unknown_game"));
        assert_eq!(
            value["message"],
            serde_json::json!("no game feedbeef; start a new game")
        );
    }

    #[test]
    fn malformed_bodies_are_rejected_before_any_lookup() {
        let err = parse_body::<GameRef>("{not json").unwrap_err();
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["error"], serde_json::json!("malformed_request"));
    }

    #[test]
    fn move_response_flattens_the_snapshot() {
        let game = Game::new("test", 1);
        let response = MoveResponse {
            success: false,
            error: Some(ApiErrorKind::InvalidMove),
            message: Some("move violates the rules".to_string()),
            state: GameSnapshot::of(&game),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], serde_json::json!(false));
        assert_eq!(value["error"], serde_json::json!("invalid_move"));
        assert_eq!(value["stock"], serde_json::json!(24));
        assert_eq!(value["game_won"], serde_json::json!(false));
        assert_eq!(value["game_id"], serde_json::json!("test"));
    }
}
