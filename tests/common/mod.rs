// Shared helpers for tests that need a real git repository
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scratch repository living in a temporary directory
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    counter: std::cell::Cell<usize>,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        TestRepo {
            dir,
            repo,
            counter: std::cell::Cell::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit a change to `file.txt` as the default author
    pub fn commit(&self, message: &str) -> Oid {
        self.commit_as(message, "Ann", "ann@example.com")
    }

    pub fn commit_as(&self, message: &str, author: &str, email: &str) -> Oid {
        self.commit_files(message, author, email, &["file.txt"])
    }

    /// Commit a change to each of `files`, creating directories as needed
    pub fn commit_files(&self, message: &str, author: &str, email: &str, files: &[&str]) -> Oid {
        let n = self.counter.get() + 1;
        self.counter.set(n);

        let mut index = self.repo.index().expect("open index");
        for file in files {
            let full = self.dir.path().join(file);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).expect("create parent dirs");
            }
            fs::write(&full, format!("change {}\n", n)).expect("write file");
            index.add_path(Path::new(file)).expect("stage file");
        }
        index.write().expect("write index");

        let tree_id = index.write_tree().expect("write tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");
        let signature = Signature::now(author, email).expect("signature");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("create commit")
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("create tag");
    }

    pub fn annotated_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("find object");
        let signature = Signature::now("Releaser", "release@example.com").expect("signature");
        self.repo
            .tag(name, &object, &signature, "release", false)
            .expect("create annotated tag");
    }

    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("find commit");
        self.repo.branch(name, &commit, false).expect("create branch");
    }
}
