use tagwright_core::{CorpusFormat, Model, TagSource, Tagger, TaggerError, evaluate_gold};
use tagwright_trainer::{ModelBuilder, build_model};

const TRAINING: &str = "\
[ Pierre/NNP Vinken/NNP ]
,/,
[ 61/CD years/NNS ]
old/JJ ,/, will/MD join/VB
[ the/DT board/NN ]
as/IN
[ a/DT nonexecutive/JJ director/NN Nov./NNP 29/CD ]
./.
[ Mr./NNP Vinken/NNP ]
is/VBZ
";

const TEST: &str = "\
No ,
[ it ]
[ was n't Black Monday ]
.
But while
[ the New York Stock Exchange ]
did n't
[ fall ]
apart
[ Friday ]";

const EXPECTED: &str = "\
No/NNP ,/, \n\
[ it/NN ]\n\
[ was/NNS n't/NN Black/NNP Monday/NNP ]\n\
./. \n\
But/NNP while/NN \n\
[ the/DT New/NNP York/NNP Stock/NNP Exchange/NNP ]\n\
did/NN n't/NN \n\
[ fall/NN ]\n\
apart/NN \n\
[ Friday/NNP ]\n\
\n";

fn trained() -> Model {
    build_model(TRAINING, &CorpusFormat::default()).unwrap()
}

#[test]
fn test_model_statistics() {
    let model = trained();
    let summary = model.summary();
    assert_eq!(summary.token_count, 21);
    assert_eq!(summary.vocabulary_size, 19);
    assert_eq!(summary.transition_count, 20);

    assert_eq!(model.candidates("Vinken").unwrap(), ["NNP", "NNP"]);
    assert_eq!(model.candidates(",").unwrap(), [",", ","]);
    assert_eq!(model.transitions().get("NNP").unwrap().total(), 5);
    assert_eq!(model.transitions().get(",").unwrap().total(), 2);
    // The final tag of the corpus has no outgoing bigram.
    assert!(model.transitions().get("VBZ").is_none());
}

#[test]
fn test_tags_unseen_text() {
    let model = trained();
    let tagger = Tagger::with_defaults(&model);
    let document = tagger.tag_text(TEST);

    assert_eq!(document.to_string(), EXPECTED);
    assert_eq!(document.words().count(), 20);
    assert_eq!(
        document.words().filter(|w| w.is_known()).count(),
        document.words().count() - document.unknown_count()
    );
}

#[test]
fn test_known_words_report_their_score() {
    let model = trained();
    let tagger = Tagger::with_defaults(&model);
    let document = tagger.tag_text("the board");
    let words: Vec<_> = document.words().collect();

    // P(the | DT) = 1/2 and VB is always followed by DT.
    assert_eq!(words[0].source, TagSource::Model { score: 0.5 });
    assert_eq!(words[1].tag, "NN");
    match words[1].source {
        TagSource::Model { score } => assert!(score > 0.0),
        TagSource::Heuristic(_) => panic!("board is a training word"),
    }
}

#[test]
fn test_tagging_is_repeatable() {
    let model = trained();
    let tagger = Tagger::with_defaults(&model);
    let first = tagger.tag_text(TEST).to_string();
    let second = tagger.tag_text(TEST).to_string();
    assert_eq!(first, second);
}

#[test]
fn test_snapshot_tags_identically() {
    let model = trained();
    let json = model.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["emissions"]["NNP"]["Vinken"], 2);
    assert_eq!(value["vocabulary"]["old"][0], "JJ");

    let restored = Model::from_json(&json).unwrap();
    assert_eq!(restored, model);
    let tagger = Tagger::with_defaults(&restored);
    assert_eq!(tagger.tag_text(TEST).to_string(), EXPECTED);
}

#[test]
fn test_pipe_delimited_round_trip() {
    let format = CorpusFormat::new().with_delimiter('|');
    let model = build_model("[ the|DT old|JJ man|NN ] walked|VBD", &format).unwrap();

    let config = tagwright_core::TaggerConfig::new().with_format(format);
    let tagger = Tagger::new(&model, config).unwrap();
    assert_eq!(
        tagger.tag_text("[ the old man ] walked\ncars").to_string(),
        "[ the|DT old|JJ man|NN ]walked|VBD \ncars|NNS \n\n"
    );
}

#[test]
fn test_training_corpus_scores_perfectly() {
    let model = trained();
    let tagger = Tagger::with_defaults(&model);
    let evaluation = evaluate_gold(&tagger, TRAINING).unwrap();

    assert_eq!(evaluation.item_total(), 21);
    assert_eq!(evaluation.item_accuracy(), 1.0);
    assert_eq!(evaluation.line_accuracy(), 1.0);
}

#[test]
fn test_malformed_corpus_reports_position() {
    let err = build_model("[ Pierre/NNP Vinken ]", &CorpusFormat::default()).unwrap_err();
    assert!(matches!(
        err,
        TaggerError::MalformedToken { ref token, position: 2 } if token == "Vinken"
    ));

    let mut builder = ModelBuilder::default();
    builder.feed_text("the/DT\n").unwrap();
    let err = builder.feed_text("[ /NN ]").unwrap_err();
    assert!(matches!(err, TaggerError::EmptyWord { position: 2, .. }));
}
