//! FNV-1a identifier hashing with a pushed-scope stack.

/// FNV-1a 32-bit offset basis, also the seed used outside any window.
pub const ID_SEED: u32 = 2166136261;

const FNV_PRIME: u32 = 16777619;

/// Hashes a string from the offset basis. Used to derive window seeds.
pub fn hash_str(s: &str) -> u32 {
    let mut h = ID_SEED;
    for c in s.chars() {
        h = hash_step(h, c as u32);
    }
    h
}

fn hash_step(h: u32, n: u32) -> u32 { (h ^ n).wrapping_mul(FNV_PRIME) }

fn hash_u32(mut h: u32, n: u32) -> u32 {
    for b in n.to_be_bytes() {
        h = hash_step(h, b as u32);
    }
    h
}

pub(crate) struct IdManager {
    id_stack: Vec<u32>,
}

impl IdManager {
    pub fn new() -> Self {
        Self { id_stack: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.id_stack.len()
    }

    /// Derives the item id for `label` under `seed` and the pushed scopes.
    /// The full label participates, including any `##` hidden suffix.
    pub fn get_id(&self, seed: u32, label: &str) -> u32 {
        let mut h = seed;
        for scope in &self.id_stack {
            h = hash_u32(h, *scope);
        }
        for c in label.chars() {
            h = hash_step(h, c as u32);
        }
        h
    }

    pub fn push_id_str(&mut self, s: &str) {
        self.id_stack.push(hash_str(s));
    }

    pub fn push_id_int(&mut self, n: i32) {
        self.id_stack.push(hash_u32(ID_SEED, n as u32));
    }

    pub fn pop_id(&mut self) {
        match self.id_stack.pop() {
            Some(_) => {}
            None => panic!("pop_id called with an empty id stack"),
        }
    }
}
