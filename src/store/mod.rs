//! The contact store: an unbalanced binary search tree keyed by name,
//! plus a one-slot undo buffer for the most recent deletion.
//!
//! Names compare case-insensitively everywhere. Equal names are allowed;
//! a duplicate routes to the right subtree and coexists as its own node.
//! The tree is never rebalanced, so a sorted insertion sequence degrades
//! to a chain. Callers that care should shuffle their input; the store
//! itself accepts O(n) descents as the cost of sorted in-order output.

use std::cmp::Ordering;

use crate::models::Contact;

mod codec;
mod error;
mod queries;

pub use error::StoreError;

struct Node {
    contact: Contact,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

impl Node {
    fn boxed(contact: Contact) -> Box<Node> {
        Box::new(Node {
            contact,
            left: None,
            right: None,
        })
    }
}

/// The ordering every descent uses: case-insensitive name comparison.
fn name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Default)]
pub struct ContactBook {
    root: Link,
    last_deleted: Option<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, attaching at the first empty slot reached by
    /// name-ordered descent. Always succeeds; duplicates are kept.
    pub fn insert(&mut self, contact: Contact) {
        Self::insert_at(&mut self.root, contact);
    }

    fn insert_at(slot: &mut Link, contact: Contact) {
        match slot {
            None => *slot = Some(Node::boxed(contact)),
            Some(node) => {
                if name_cmp(&contact.name, &node.contact.name) == Ordering::Less {
                    Self::insert_at(&mut node.left, contact);
                } else {
                    Self::insert_at(&mut node.right, contact);
                }
            }
        }
    }

    /// Multi-field lookup: case-insensitive equality against name, phone,
    /// or email, checked at each node along the name-ordered descent.
    ///
    /// Phone and email only match on the path the name comparison takes,
    /// so a contact whose name routes the query to the other subtree is
    /// not found even when its phone or email equals the query. The
    /// descent never visits more than one branch.
    pub fn find(&self, query: &str) -> Option<&Contact> {
        let lowered = query.to_lowercase();
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.contact.matches(&lowered) {
                return Some(&n.contact);
            }
            node = if name_cmp(query, &n.contact.name) == Ordering::Less {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        None
    }

    /// Exact-name lookup under the same descent delete and update use.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match name_cmp(name, &n.contact.name) {
                Ordering::Equal => return Some(&n.contact),
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        None
    }

    /// Exact-name locate used by the mutating operations.
    fn find_name_mut<'a>(slot: &'a mut Link, name: &str) -> Option<&'a mut Contact> {
        let node = slot.as_deref_mut()?;
        match name_cmp(name, &node.contact.name) {
            Ordering::Equal => Some(&mut node.contact),
            Ordering::Less => Self::find_name_mut(&mut node.left, name),
            Ordering::Greater => Self::find_name_mut(&mut node.right, name),
        }
    }

    /// Remove the contact with the given name (exact, case-insensitive).
    ///
    /// The removed contact is copied into the undo slot, replacing any
    /// earlier snapshot, and returned. An absent name is a negative
    /// result: the tree is untouched and the undo slot keeps whatever it
    /// held before.
    pub fn delete(&mut self, name: &str) -> Result<Contact, StoreError> {
        let (root, removed) = Self::delete_at(self.root.take(), name);
        self.root = root;
        match removed {
            Some(contact) => {
                self.last_deleted = Some(contact.clone());
                Ok(contact)
            }
            None => Err(StoreError::NotFound(name.to_string())),
        }
    }

    /// Recursive removal that returns the (possibly new) subtree root, so
    /// each level reattaches its child slot without aliasing into the tree.
    fn delete_at(link: Link, name: &str) -> (Link, Option<Contact>) {
        let Some(mut node) = link else {
            return (None, None);
        };
        match name_cmp(name, &node.contact.name) {
            Ordering::Less => {
                let (left, removed) = Self::delete_at(node.left.take(), name);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = Self::delete_at(node.right.take(), name);
                node.right = right;
                (Some(node), removed)
            }
            Ordering::Equal => {
                let removed = node.contact.clone();
                let replacement = match (node.left.take(), node.right.take()) {
                    (None, right) => right,
                    (left @ Some(_), None) => left,
                    (left, Some(right)) => {
                        // Two children: the in-order successor (leftmost of
                        // the right subtree) takes this node's place, then
                        // the successor's original node is deleted out of
                        // the right subtree by name.
                        let successor = Self::leftmost(&right).clone();
                        let successor_name = successor.name.clone();
                        node.contact = successor;
                        let (right, _) = Self::delete_at(Some(right), &successor_name);
                        node.left = left;
                        node.right = right;
                        Some(node)
                    }
                };
                (replacement, Some(removed))
            }
        }
    }

    fn leftmost(node: &Node) -> &Contact {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        &current.contact
    }

    /// Replace phone and/or email on the named contact. A `None` or empty
    /// replacement leaves the current value in place. Names cannot be
    /// changed: the node's tree position is fixed at insertion.
    pub fn update(
        &mut self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), StoreError> {
        let contact = Self::find_name_mut(&mut self.root, name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
            contact.phone = phone.to_string();
        }
        if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
            contact.email = email.to_string();
        }
        Ok(())
    }

    /// Flip the favorite flag in place, returning the new state.
    pub fn toggle_favorite(&mut self, name: &str) -> Result<bool, StoreError> {
        let contact = Self::find_name_mut(&mut self.root, name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        contact.favorite = !contact.favorite;
        Ok(contact.favorite)
    }

    /// Re-insert the most recently deleted contact and clear the slot.
    /// Only the latest deletion is recoverable; a second delete before
    /// undo discards the first snapshot for good.
    pub fn undo_delete(&mut self) -> Result<Contact, StoreError> {
        let contact = self.last_deleted.take().ok_or(StoreError::EmptyUndo)?;
        self.insert(contact.clone());
        Ok(contact)
    }

    /// The contact an undo would restore, if any.
    pub fn last_deleted(&self) -> Option<&Contact> {
        self.last_deleted.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(names: &[&str]) -> ContactBook {
        let mut book = ContactBook::new();
        for name in names {
            book.insert(Contact::new(*name, "000", format!("{}@example.com", name)));
        }
        book
    }

    fn names(book: &ContactBook) -> Vec<String> {
        book.contacts().iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn in_order_is_sorted_case_insensitively() {
        let book = book_with(&["delta", "Bravo", "alpha", "Charlie", "echo"]);
        assert_eq!(names(&book), ["alpha", "Bravo", "Charlie", "delta", "echo"]);
    }

    #[test]
    fn duplicate_names_coexist() {
        let book = book_with(&["Amy", "amy", "AMY"]);
        assert_eq!(book.len(), 3);
        assert_eq!(names(&book), ["Amy", "amy", "AMY"]);
    }

    #[test]
    fn find_matches_name_phone_or_email() {
        let mut book = ContactBook::new();
        book.insert(Contact::new("Bob", "111", "bob@x"));
        book.insert(Contact::new("Amy", "222", "amy@x"));
        book.insert(Contact::new("Cid", "333", "cid@x"));

        assert_eq!(book.find("amy").map(|c| c.name.as_str()), Some("Amy"));
        // "222" orders before "bob", so the descent goes left and reaches
        // Amy, whose phone matches.
        assert_eq!(book.find("222").map(|c| c.name.as_str()), Some("Amy"));
        assert_eq!(book.find("BOB@X").map(|c| c.name.as_str()), Some("Bob"));
        assert!(book.find("dora").is_none());
    }

    #[test]
    fn get_matches_name_only() {
        let mut book = ContactBook::new();
        book.insert(Contact::new("Bob", "111", "bob@x"));
        assert!(book.get("BOB").is_some());
        assert!(book.get("111").is_none());
        assert!(book.get("bob@x").is_none());
    }

    #[test]
    fn find_only_checks_the_name_ordered_path() {
        // Cid sits right of root Amy, but his phone "111" orders before
        // "amy", so the descent turns left and never reaches him. The
        // search follows the name-ordered path only.
        let mut book = ContactBook::new();
        book.insert(Contact::new("Amy", "222", "amy@x"));
        book.insert(Contact::new("Cid", "111", "cid@x"));

        assert!(book.find("111").is_none());
        // By name he is always reachable.
        assert!(book.find("Cid").is_some());
    }

    #[test]
    fn delete_leaf() {
        let mut book = book_with(&["Bob", "Amy", "Cid"]);
        let removed = book.delete("Cid").unwrap();
        assert_eq!(removed.name, "Cid");
        assert_eq!(names(&book), ["Amy", "Bob"]);
    }

    #[test]
    fn delete_node_with_one_child() {
        let mut book = book_with(&["Bob", "Amy", "Cid", "Dora"]);
        book.delete("Cid").unwrap();
        assert_eq!(names(&book), ["Amy", "Bob", "Dora"]);
    }

    #[test]
    fn delete_root_with_two_children_uses_successor() {
        let mut book = book_with(&["Dora", "Bob", "Gil", "Eve", "Hal"]);
        book.delete("Dora").unwrap();
        assert_eq!(names(&book), ["Bob", "Eve", "Gil", "Hal"]);
        // The successor's full record survived the move.
        assert_eq!(book.find("Eve").unwrap().email, "Eve@example.com");
    }

    #[test]
    fn delete_missing_is_not_found_and_leaves_tree_unchanged() {
        let mut book = book_with(&["Bob", "Amy", "Cid"]);
        let before = names(&book);
        let err = book.delete("Zed").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(names(&book), before);
        assert_eq!(book.len(), 3);
        assert!(book.last_deleted().is_none());
    }

    #[test]
    fn insert_then_delete_restores_prior_sequence() {
        let mut book = book_with(&["delta", "Bravo", "echo"]);
        let before = names(&book);
        book.insert(Contact::new("Coda", "999", "coda@x"));
        book.delete("Coda").unwrap();
        assert_eq!(names(&book), before);
    }

    #[test]
    fn update_replaces_only_non_empty_fields() {
        let mut book = book_with(&["Amy"]);
        book.update("amy", Some("555"), None).unwrap();
        let c = book.find("Amy").unwrap();
        assert_eq!(c.phone, "555");
        assert_eq!(c.email, "Amy@example.com");

        book.update("Amy", Some(""), Some("new@x")).unwrap();
        let c = book.find("Amy").unwrap();
        assert_eq!(c.phone, "555");
        assert_eq!(c.email, "new@x");

        let err = book.update("Zed", Some("1"), None).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn toggle_favorite_flips_in_place() {
        let mut book = book_with(&["Amy"]);
        assert!(book.toggle_favorite("AMY").unwrap());
        assert!(!book.toggle_favorite("amy").unwrap());
        assert!(matches!(
            book.toggle_favorite("Zed"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn undo_restores_all_fields() {
        let mut book = ContactBook::new();
        book.insert(
            Contact::new("Amy", "222", "amy@x")
                .with_group("friends")
                .with_birthday("2000-05-20"),
        );
        book.toggle_favorite("Amy").unwrap();
        let deleted = book.delete("Amy").unwrap();
        assert!(book.is_empty());

        let restored = book.undo_delete().unwrap();
        assert_eq!(restored, deleted);
        let c = book.find("Amy").unwrap();
        assert!(c.favorite);
        assert_eq!(c.group.as_deref(), Some("friends"));
        assert_eq!(c.birthday.as_deref(), Some("2000-05-20"));
    }

    #[test]
    fn undo_restores_pre_delete_sequence() {
        let mut book = ContactBook::new();
        book.insert(Contact::new("Bob", "111", "bob@x"));
        book.insert(Contact::new("Amy", "222", "amy@x"));
        book.insert(Contact::new("Cid", "333", "cid@x"));
        assert_eq!(names(&book), ["Amy", "Bob", "Cid"]);

        book.delete("Bob").unwrap();
        assert_eq!(names(&book), ["Amy", "Cid"]);

        book.undo_delete().unwrap();
        assert_eq!(names(&book), ["Amy", "Bob", "Cid"]);
    }

    #[test]
    fn second_delete_discards_first_snapshot() {
        let mut book = book_with(&["Amy", "Bob"]);
        book.delete("Amy").unwrap();
        book.delete("Bob").unwrap();

        let restored = book.undo_delete().unwrap();
        assert_eq!(restored.name, "Bob");
        assert_eq!(names(&book), ["Bob"]);

        // Slot is consumed: a second undo has nothing left.
        assert!(matches!(book.undo_delete(), Err(StoreError::EmptyUndo)));
    }

    #[test]
    fn undo_on_fresh_book_is_empty_undo() {
        let mut book = ContactBook::new();
        assert!(matches!(book.undo_delete(), Err(StoreError::EmptyUndo)));
    }

    #[test]
    fn degenerate_chain_still_works() {
        // Sorted insertion order produces a right-leaning chain; the store
        // accepts the depth and keeps its semantics.
        let names_sorted: Vec<String> = (0..50).map(|i| format!("name{:02}", i)).collect();
        let mut book = ContactBook::new();
        for n in &names_sorted {
            book.insert(Contact::new(n.clone(), "0", "x@x"));
        }
        assert_eq!(names(&book), names_sorted);
        book.delete("name25").unwrap();
        assert_eq!(book.len(), 49);
        assert!(book.find("name25").is_none());
    }
}
