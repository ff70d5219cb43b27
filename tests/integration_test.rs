// Integration tests for Relate

use std::fs;
use std::path::Path;
use std::process::Command;

use relate::{recommend, Corpus, EmbeddingTable, Error, Tokenizer};
use tempfile::TempDir;

const GLOVE: &str = "\
market 1.0 0.0 0.0
shares 0.9 0.1 0.0
profit 0.8 0.2 0.0
football 0.0 1.0 0.0
goal 0.0 0.9 0.1
striker 0.1 0.9 0.0
election 0.0 0.0 1.0
";

struct Fixture {
	dir: TempDir,
}

impl Fixture {
	fn new() -> Self {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("glove.txt"), GLOVE).unwrap();

		let articles = [
			("business/001.txt", "Markets rally\nShares and profit rose as the market opened.\n"),
			("business/002.txt", "Profit warning\nThe market fell; shares and profit slid.\n"),
			("sport/001.txt", "Cup final\nThe striker scored a late goal in the football final.\n"),
			("sport/002.txt", "Transfer news\nA football striker signs after a goal-laden season.\n"),
			("politics/001.txt", "Polls open\nThe election campaign ends today.\n"),
			("misc/empty.txt", "Zzz\nNothing recognisable here at all.\n"),
		];
		for (rel, text) in articles {
			let path = dir.path().join("bbc").join(rel);
			fs::create_dir_all(path.parent().unwrap()).unwrap();
			fs::write(path, text).unwrap();
		}

		Self { dir }
	}

	fn glove(&self) -> std::path::PathBuf {
		self.dir.path().join("glove.txt")
	}

	fn corpus(&self) -> std::path::PathBuf {
		self.dir.path().join("bbc")
	}

	fn load(&self) -> (EmbeddingTable, Corpus) {
		let table = EmbeddingTable::load(&self.glove()).unwrap();
		let corpus = Corpus::load(&self.corpus(), &table, &Tokenizer::english()).unwrap();
		(table, corpus)
	}

	fn relate(&self) -> Command {
		let mut cmd = Command::new(env!("CARGO_BIN_EXE_relate"));
		cmd.arg("-e").arg(self.glove()).arg("-c").arg(self.corpus());
		cmd.env_remove("RELATE_EMBEDDINGS").env_remove("RELATE_CORPUS");
		cmd
	}
}

fn ids(records: &[&relate::DocumentRecord]) -> Vec<String> {
	records.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn test_topic_neighbours_rank_first() {
	let fixture = Fixture::new();
	let (table, corpus) = fixture.load();
	assert_eq!(table.dim(), 3);
	assert_eq!(corpus.len(), 6);

	let business = corpus.get("business/001.txt").unwrap();
	let recs = recommend(business, &corpus, 1);
	assert_eq!(ids(&recs), vec!["business/002.txt"]);

	let sport = corpus.get("sport/002.txt").unwrap();
	let recs = recommend(sport, &corpus, 1);
	assert_eq!(ids(&recs), vec!["sport/001.txt"]);
}

#[test]
fn test_recommend_properties_hold_for_every_article() {
	let fixture = Fixture::new();
	let (table, corpus) = fixture.load();

	for target in &corpus {
		if let Some(centroid) = target.centroid() {
			assert_eq!(centroid.dim(), table.dim());
		}

		for n in [0, 1, 3, 5, 10] {
			let ranked = relate::rank(target, &corpus, n);
			assert_eq!(ranked.len(), n.min(corpus.len() - 1));
			assert!(ranked.iter().all(|r| r.record.id() != target.id()));
			assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
		}
	}
}

#[test]
fn test_article_without_known_words_ranks_last() {
	let fixture = Fixture::new();
	let (_, corpus) = fixture.load();

	let empty = corpus.get("misc/empty.txt").unwrap();
	assert!(empty.centroid().is_none());
	assert_eq!(corpus.degenerate_count(), 1);

	let target = corpus.get("politics/001.txt").unwrap();
	let recs = recommend(target, &corpus, 5);
	assert_eq!(recs.last().unwrap().id(), "misc/empty.txt");

	// A degenerate target still gets a full, deterministic list
	let recs = ids(&recommend(empty, &corpus, 5));
	assert_eq!(recs.len(), 5);
	assert_eq!(recs, ids(&recommend(empty, &corpus, 5)));
}

#[test]
fn test_listing_and_lookup() {
	let fixture = Fixture::new();
	let (_, corpus) = fixture.load();

	let listing = corpus.list();
	assert_eq!(listing.len(), 6);
	assert_eq!(listing[0].id, "business/001.txt");
	assert_eq!(listing[0].title, "Markets rally");

	let doc = corpus.get("sport/001.txt").unwrap();
	assert_eq!(doc.body(), "The striker scored a late goal in the football final.\n");

	assert!(matches!(corpus.get("sport/999.txt"), Err(Error::NotFound { .. })));
}

#[test]
fn test_missing_embeddings_is_resource_error() {
	let err = EmbeddingTable::load(Path::new("/no/such/glove.txt")).unwrap_err();
	assert!(err.is_resource());
}

#[test]
fn test_version_display() {
	let output = Command::new(env!("CARGO_BIN_EXE_relate"))
		.arg("--version")
		.output()
		.expect("Failed to run relate --version");

	assert!(output.status.success(), "Version command failed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("relate"), "Expected 'relate' in version output");
}

#[test]
fn test_help_display() {
	let output = Command::new(env!("CARGO_BIN_EXE_relate"))
		.arg("--help")
		.output()
		.expect("Failed to run relate --help");

	assert!(output.status.success(), "Help command failed");
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("list") && stdout.contains("recommend"), "Expected subcommands in help output");
}

#[test]
fn test_recommend_export_to_stdout() {
	let fixture = Fixture::new();
	let output = fixture
		.relate()
		.args(["recommend", "sport/001.txt", "-n", "2", "--export", "-"])
		.output()
		.expect("Failed to run relate recommend");

	assert!(output.status.success(), "Recommend command failed: {}", String::from_utf8_lossy(&output.stderr));

	let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON only");
	assert_eq!(json["target"], "sport/001.txt");
	assert_eq!(json["corpus_size"], 6);
	let recs = json["recommendations"].as_array().unwrap();
	assert_eq!(recs.len(), 2);
	assert_eq!(recs[0]["id"], "sport/002.txt");
}

#[test]
fn test_list_json() {
	let fixture = Fixture::new();
	let output = fixture.relate().args(["list", "--json"]).output().expect("Failed to run relate list");

	assert!(output.status.success());
	let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON only");
	assert_eq!(json.as_array().unwrap().len(), 6);
}

#[test]
fn test_unknown_article_fails() {
	let fixture = Fixture::new();
	let output = fixture.relate().args(["show", "nope.txt"]).output().expect("Failed to run relate show");

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("document not found: nope.txt"), "{stderr}");
}

#[test]
fn test_missing_paths_reported() {
	let output = Command::new(env!("CARGO_BIN_EXE_relate"))
		.args(["list"])
		.env_remove("RELATE_EMBEDDINGS")
		.env_remove("RELATE_CORPUS")
		.output()
		.expect("Failed to run relate list");

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("--embeddings"), "{stderr}");
}
