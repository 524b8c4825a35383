use ruplan_core::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

/*
    Obiettivo test: Verificare che LoginResponse venga serializzato nel JSON atteso:
    il riassunto utente deve usare "_id" come chiave identità (compatibilità con il
    client esistente) e name/email in chiaro.
    Verificare anche che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust.
*/
#[test]
fn http_login_response_roundtrip() {
    let user = User {
        user_id: "55555555-5555-4555-8555-555555555555".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    };
    let resp = LoginResponse {
        message: "Login successful!".to_string(),
        token: "token123".to_string(),
        user: user.clone(),
    };

    let s = json::to_string(&resp).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["message"], "Login successful!");
    assert_eq!(v["token"], "token123");
    assert_eq!(v["user"]["_id"], user.user_id);
    assert_eq!(v["user"]["name"], user.name);
    assert_eq!(v["user"]["email"], user.email);
    // la chiave Rust user_id non deve comparire sul wire
    assert!(v["user"].get("userId").is_none());

    let back: LoginResponse = json::from_str(&s).expect("deserialize");
    assert_eq!(back.user, user);
    assert_eq!(back.token, "token123");
}

/*
    Obiettivo test: Verificare che Project venga serializzato con i nomi campo
    attesi sul wire: "_id" per l'identità e "userId" in camelCase per il
    riferimento al proprietario.
    Verificare anche che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust.
*/
#[test]
fn project_roundtrip() {
    let p = Project {
        project_id: "33333333-3333-4333-8333-333333333333".to_string(),
        user_id: "55555555-5555-4555-8555-555555555555".to_string(),
        title: "LabLink".to_string(),
        description: Some("Piattaforma di prenotazione laboratori".to_string()),
    };

    let s = json::to_string(&p).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["_id"], p.project_id);
    assert_eq!(v["userId"], p.user_id);
    assert_eq!(v["title"], p.title);
    assert_eq!(v["description"], p.description.clone().unwrap());

    let back: Project = json::from_str(&s).expect("deserialize");
    assert_eq!(back, p);
}

/*
    Questo test è simile al precedente ma verifica il caso in cui la descrizione è None.
    Obiettivo: il campo description deve essere omesso dal JSON, e un JSON senza
    description deve deserializzare in description = None.
*/
#[test]
fn project_omits_optional_description() {
    let p = Project {
        project_id: "33333333-3333-4333-8333-333333333333".to_string(),
        user_id: "55555555-5555-4555-8555-555555555555".to_string(),
        title: "KrishiLease".to_string(),
        description: None,
    };

    let s = json::to_string(&p).expect("serialize");
    let v = parse(&s);

    assert!(v.get("description").is_none(), "description should be omitted");

    let back: Project = json::from_str(&s).expect("deserialize");
    assert_eq!(back, p);
}

/*
    Obiettivo test:
    verificare che CreateProjectRequest venga serializzato nel JSON con i nomi campo giusti (camelCase)
    verificare che lo stesso JSON sia deserializzabile di nuovo nello stesso valore Rust
*/
#[test]
fn http_create_project_request_roundtrip() {
    let req = CreateProjectRequest {
        user_id: "55555555-5555-4555-8555-555555555555".to_string(),
        title: "LabLink".to_string(),
        description: Some("x".to_string()),
    };

    let s = json::to_string(&req).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["userId"], req.user_id);
    assert_eq!(v["title"], req.title);
    assert_eq!(v["description"], "x");

    let back: CreateProjectRequest = json::from_str(&s).expect("deserialize");
    assert_eq!(back, req);
}

/*
    Obiettivo test: una lista di progetti viaggia come array JSON nudo, senza
    wrapper. Verificare l'ordine e le chiavi dei singoli elementi.
*/
#[test]
fn project_list_is_bare_array() {
    let p1 = Project {
        project_id: "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb".to_string(),
        user_id: "cccccccc-cccc-4ccc-8ccc-cccccccccccc".to_string(),
        title: "uno".to_string(),
        description: None,
    };
    let p2 = Project {
        project_id: "dddddddd-dddd-4ddd-8ddd-dddddddddddd".to_string(),
        user_id: p1.user_id.clone(),
        title: "due".to_string(),
        description: Some("secondo".to_string()),
    };
    let list = vec![p1.clone(), p2.clone()];

    let s = json::to_string(&list).expect("serialize");
    let v = parse(&s);

    assert!(v.is_array());
    assert_eq!(v[0]["_id"], p1.project_id);
    assert_eq!(v[1]["_id"], p2.project_id);

    let back: Vec<Project> = json::from_str(&s).expect("deserialize");
    assert_eq!(back, list);
}

/*
    Obiettivo test:
    verificare che ErrorResponse venga serializzato come { "message": ... }
    e che il JSON di errore del server sia deserializzabile dal client.
*/
#[test]
fn error_response_roundtrip() {
    let err = ErrorResponse {
        message: "Email already registered. Please login instead.".to_string(),
    };

    let s = json::to_string(&err).expect("serialize");
    let v = parse(&s);

    assert_eq!(v["message"], err.message);

    let back: ErrorResponse = json::from_str(&s).expect("deserialize");
    assert_eq!(back, err);
}
