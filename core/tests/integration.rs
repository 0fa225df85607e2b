//! Component and client lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `WordListComponent`
//! through `UreqTransport` over real HTTP. Covers the happy paths and the
//! rollback paths that need a real server to reject something.

use std::net::SocketAddr;

use vocab_core::{
    ApiError, ClientConfig, ComponentError, UreqTransport, VocabClient, WordEntry, WordListComponent,
};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn config(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(&format!("http://{addr}")).unwrap()
}

#[test]
fn component_lifecycle() {
    let addr = start_server();
    let mut component = WordListComponent::new(&config(addr), UreqTransport::new());

    // Step 1: mount — empty server, empty list.
    component.mount().unwrap();
    assert!(component.words().is_empty(), "expected empty list");

    // Step 2: submit a word.
    component.set_new_word(WordEntry::draft("test", "test translation", "test description"));
    let created = component.submit().unwrap();
    assert_eq!(component.words().len(), 1);
    assert_eq!(component.words().rows()[0].entry.word, "test");
    let id = created.id.unwrap();
    assert!(component.words().contains(id));
    assert!(component.new_word().word.is_empty(), "form should be reset");

    // Step 3: a second word keeps submission order.
    component.set_new_word(WordEntry::draft("pes", "dog", ""));
    component.submit().unwrap();
    let words: Vec<_> = component.words().entries().map(|e| e.word.as_str()).collect();
    assert_eq!(words, ["test", "pes"]);

    // Step 4: a fresh mount sees the same list, in the same order.
    let mut other = WordListComponent::new(&config(addr), UreqTransport::new());
    other.mount().unwrap();
    let fetched: Vec<_> = other.words().entries().cloned().collect();
    let local: Vec<_> = component.words().entries().cloned().collect();
    assert_eq!(fetched, local);

    // Step 5: remove the first word.
    component.remove(id).unwrap();
    assert_eq!(component.words().len(), 1);
    assert!(!component.words().contains(id));

    // Step 6: server agrees.
    other.mount().unwrap();
    assert_eq!(other.words().len(), 1);
}

#[test]
fn remove_rolls_back_when_server_does_not_know_the_id() {
    let addr = start_server();
    let client = VocabClient::new(&format!("http://{addr}"));
    let transport = UreqTransport::new();

    let entry = client
        .add_word(&transport, &WordEntry::draft("strom", "tree", ""))
        .unwrap();
    let id = entry.id.unwrap();

    let mut component = WordListComponent::new(&config(addr), UreqTransport::new());
    component.mount().unwrap();

    // Someone else deletes it behind the component's back.
    client.remove_word(&transport, id).unwrap();

    let err = component.remove(id).unwrap_err();
    assert!(matches!(err, ComponentError::Api(ref e) if e.is_not_found()));
    assert!(component.words().contains(id), "entry must reappear after rollback");
}

#[test]
fn paging_follows_the_cursor() {
    let addr = start_server();
    let client = VocabClient::new(&format!("http://{addr}"));
    let transport = UreqTransport::new();
    for word in ["a", "b", "c", "d", "e"] {
        client.add_word(&transport, &WordEntry::draft(word, "", "")).unwrap();
    }

    let config = config(addr).with_page_size(2).unwrap();
    let mut component = WordListComponent::new(&config, UreqTransport::new());
    assert_eq!(component.load_more().unwrap(), 2);
    assert_eq!(component.load_more().unwrap(), 2);
    assert_eq!(component.load_more().unwrap(), 1);
    assert_eq!(component.load_more().unwrap(), 0);

    let words: Vec<_> = component.words().entries().map(|e| e.word.as_str()).collect();
    assert_eq!(words, ["a", "b", "c", "d", "e"]);
}

#[test]
fn unreachable_server_is_a_network_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut component = WordListComponent::new(&config(addr), UreqTransport::new());
    component.set_new_word(WordEntry::draft("test", "", ""));

    let err = component.submit().unwrap_err();
    assert!(matches!(err, ComponentError::Api(ApiError::Network(_))));
    assert!(component.words().is_empty());
    assert!(component.feedback().is_some());
}
