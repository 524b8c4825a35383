use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Chiavi fisse dello storage durevole di sessione.
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Persistenza chiave-valore con ambito locale: operazioni esplicite di
/// lettura/scrittura/pulizia, indipendenti da come la UI viene disegnata.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Svuota l'intero ambito (usata al logout).
    fn clear(&self);
}

/// Store su filesystem: un file per chiave sotto una directory base.
/// Gli errori di I/O vengono ignorati: una sessione non ripristinabile
/// equivale a una sessione assente.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }

    fn clear(&self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

/// Store in memoria, per i test e per girare senza filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}
