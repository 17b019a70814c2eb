//! Response envelope and annotation types.
//!
//! Every annotation is a plain data struct decoded straight from the API
//! JSON. Cross-references between annotations (an entity and the words it
//! matched, a word and its dependency-tree parent) are carried on the wire as
//! document-global word positions; [`Response`] indexes those positions once
//! at decode time and resolves links on demand.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Result, TextRazorError};

/// Part-of-speech tags that can never be the root of a dependency tree.
const PUNCTUATION_TAGS: &[&str] = &["$", "``", "''", "(", ")", ",", "--", ".", ":"];

/// An abstract topic extracted from the input text.
///
/// Requires the `topics` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Topic {
    /// Unique id of this annotation within its annotation set.
    pub id: Option<u32>,

    /// Human-readable label for this topic.
    pub label: String,

    /// Link to Wikipedia for this topic, if it could be linked to a page.
    pub wiki_link: Option<String>,

    /// Relevancy of this topic to the query document.
    pub score: f64,
}

/// A named entity extracted from the input text.
///
/// Requires the `entities` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entity {
    /// Unique id of this annotation within the document.
    #[serde(rename = "id")]
    pub document_id: Option<u32>,

    /// Disambiguated entity id, or `None` if the entity could not be
    /// disambiguated.
    pub entity_id: Option<String>,

    /// Disambiguated Freebase id, where a Freebase link exists.
    pub freebase_id: Option<String>,

    /// Link to Wikipedia for this entity, where one exists.
    pub wiki_link: Option<String>,

    /// Source text that matched this entity.
    pub matched_text: Option<String>,

    /// Start offset of the match in the input text.
    pub starting_pos: Option<u32>,

    /// End offset of the match in the input text.
    pub ending_pos: Option<u32>,

    /// Positions of the words that make up this entity.
    pub matching_tokens: Vec<u32>,

    /// Freebase types for this entity.
    pub freebase_types: Vec<String>,

    /// Relevance of this entity to the source text, 0 to 1.
    pub relevance_score: Option<f64>,

    /// Confidence that this is a valid entity, 0.5 to 10. Combines contextual
    /// agreement with the TextRazor knowledgebase, agreement between other
    /// entities in the text, and prior probabilities from web datasets.
    pub confidence_score: Option<f64>,

    /// DBPedia types for this entity.
    #[serde(rename = "type")]
    pub dbpedia_types: Vec<String>,

    /// Enriched linked data found for this entity, keyed by the enrichment
    /// query that produced it.
    pub data: HashMap<String, serde_json::Value>,
}

/// A word entailed by the source text.
///
/// Requires the `entailments` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entailment {
    /// Unique id of this annotation within its annotation set.
    pub id: Option<u32>,

    /// Positions of the words that generated this entailment.
    pub word_positions: Vec<u32>,

    /// Score of this entailment independent of its context in the sentence.
    pub prior_score: Option<f64>,

    /// Agreement between the source word's usage in this sentence and the
    /// entailed word's usage in the knowledgebase.
    pub context_score: Option<f64>,

    /// Overall confidence that this is a valid entailment.
    pub score: Option<f64>,

    pub entailed_tree: Option<EntailedTree>,
}

impl Entailment {
    /// The word string entailed by the source words.
    pub fn entailed_word(&self) -> Option<&str> {
        self.entailed_tree.as_ref().and_then(|tree| tree.word.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntailedTree {
    pub word: Option<String>,
}

/// Grammatical role of a [`RelationParam`] relative to its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParamRelation {
    Subject,
    Object,
    #[serde(other)]
    Other,
}

/// A param of a [`Relation`], typically its subject or object.
///
/// Requires the `relations` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationParam {
    /// Role of this param relative to the predicate.
    pub relation: Option<ParamRelation>,

    /// Positions of the words in this param within the document.
    pub word_positions: Vec<u32>,
}

/// A grammatical relation between words, owning the params that fill its
/// subject and object slots.
///
/// Requires the `relations` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relation {
    /// Unique id of this annotation within its annotation set.
    pub id: Option<u32>,

    /// Positions of the predicate words of this relation.
    pub word_positions: Vec<u32>,

    /// Params of this relation.
    pub params: Vec<RelationParam>,
}

/// A property relation extracted from the text, implying an "is-a" or
/// "has-a" relationship between the predicate (focus) and its property.
///
/// Requires the `relations` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    /// Unique id of this annotation within its annotation set.
    pub id: Option<u32>,

    /// Positions of the words in the predicate (focus) of this property.
    pub word_positions: Vec<u32>,

    /// Positions of the words that modify the predicate.
    pub property_positions: Vec<u32>,
}

/// A multi-word phrase extracted from a sentence.
///
/// Requires the `phrases` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NounPhrase {
    /// Unique id of this annotation within its annotation set.
    pub id: Option<u32>,

    /// Positions of the words in this phrase.
    pub word_positions: Vec<u32>,
}

/// A Wordnet sense attributed to a word, with its score.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sense {
    pub sense: String,
    pub score: f64,
}

/// A single word (token) extracted from the input text.
///
/// Requires the `words` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Word {
    /// Document-global position of this word.
    pub position: u32,

    /// Position of the grammatical parent of this word. Absent or negative
    /// when the word is at the root of its sentence, or when the
    /// `dependency-trees` extractor was not requested.
    pub parent_position: Option<i32>,

    /// Grammatical relation between this word and its parent, using the
    /// Stanford uncollapsed dependency labels.
    pub relation_to_parent: Option<String>,

    /// Stem of this word.
    pub stem: Option<String>,

    /// Morphological root of this word.
    pub lemma: Option<String>,

    /// Raw token string that matched this word in the source text.
    pub token: String,

    /// Penn treebank part-of-speech tag for this word.
    pub part_of_speech: Option<String>,

    /// Start offset of this token in the input text. Offsets count Unicode
    /// characters, not bytes.
    pub starting_pos: Option<u32>,

    /// End offset of this token in the input text.
    pub ending_pos: Option<u32>,

    /// Wordnet senses this word may be a part of, with their scores.
    ///
    /// Requires the `senses` extractor.
    pub senses: Vec<Sense>,
}

/// A single sentence extracted from the input text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sentence {
    pub position: Option<u32>,

    /// The words in this sentence, in document order.
    pub words: Vec<Word>,
}

impl Sentence {
    /// The root word of this sentence's dependency tree: the word with no
    /// valid parent whose part of speech is not punctuation. `None` unless
    /// the `dependency-trees` extractor was requested.
    pub fn root_word(&self) -> Option<&Word> {
        let mut root = None;
        for word in &self.words {
            let has_parent = word.parent_position.is_some_and(|parent| parent >= 0);
            if has_parent {
                continue;
            }
            let tag = word.part_of_speech.as_deref().unwrap_or("");
            if !PUNCTUATION_TAGS.contains(&tag) {
                root = Some(word);
            }
        }
        root
    }
}

/// A link from a custom annotation to another annotation, by name and id.
///
/// Resolve with [`Response::entity_by_document_id`], [`Response::topic_by_id`]
/// and friends, depending on `annotation_name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationLink {
    pub annotation_name: String,
    pub linked_id: Option<u32>,
}

/// One key/value group in a custom annotation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotationContent {
    pub key: Option<String>,
    pub links: Vec<AnnotationLink>,
    pub int_value: Vec<i64>,
    pub float_value: Vec<f64>,
    pub string_value: Vec<String>,
    pub bytes_value: Vec<String>,
}

/// An annotation produced by a custom Prolog rule in the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomAnnotation {
    /// Name of the rule that produced this annotation.
    pub name: String,

    pub contents: Vec<AnnotationContent>,
}

impl CustomAnnotation {
    /// The content group with the given key, if any.
    pub fn content(&self, key: &str) -> Option<&AnnotationContent> {
        self.contents
            .iter()
            .find(|content| content.key.as_deref() == Some(key))
    }
}

/// The `response` object of a TextRazor reply. Sections for extractors that
/// were not requested are absent on the wire and decode to empty collections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ResponseData {
    pub custom_annotations: Vec<CustomAnnotation>,
    pub topics: Vec<Topic>,
    pub coarse_topics: Vec<Topic>,
    pub entities: Vec<Entity>,
    pub entailments: Vec<Entailment>,
    pub relations: Vec<Relation>,
    pub properties: Vec<Property>,
    pub noun_phrases: Vec<NounPhrase>,
    pub sentences: Vec<Sentence>,
    pub language: Option<String>,
    pub language_is_reliable: Option<bool>,
    pub raw_text: Option<String>,
    pub cleaned_text: Option<String>,
    pub custom_annotation_output: Option<String>,
}

/// Top-level reply envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ResponseEnvelope {
    pub ok: bool,
    pub time: f64,
    pub error: Option<String>,
    pub message: Option<String>,
    pub response: ResponseData,
}

/// A decoded TextRazor analysis response.
///
/// Annotation accessors return borrowed slices into the response; linking
/// helpers resolve the word positions carried by each annotation against the
/// words in [`Response::sentences`].
#[derive(Debug, Clone)]
pub struct Response {
    envelope: ResponseEnvelope,
    // Word positions are document-global and unique.
    word_index: HashMap<u32, (usize, usize)>,
}

impl Response {
    pub(crate) fn new(envelope: ResponseEnvelope) -> Self {
        let mut word_index = HashMap::new();
        for (sentence_idx, sentence) in envelope.response.sentences.iter().enumerate() {
            for (word_idx, word) in sentence.words.iter().enumerate() {
                word_index.insert(word.position, (sentence_idx, word_idx));
            }
        }
        Self { envelope, word_index }
    }

    /// Decode a response from its raw JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let envelope: ResponseEnvelope =
            serde_json::from_value(value).map_err(|e| TextRazorError::Parse(e.to_string()))?;
        Ok(Self::new(envelope))
    }

    /// Whether the document was analyzed successfully. When `false`, see
    /// [`Response::error`] for details.
    pub fn ok(&self) -> bool {
        self.envelope.ok
    }

    /// Descriptive message for any problem that occurred during analysis, or
    /// an empty string if there was none.
    pub fn error(&self) -> &str {
        self.envelope.error.as_deref().unwrap_or("")
    }

    /// Warning or informational messages returned by the server.
    pub fn message(&self) -> &str {
        self.envelope.message.as_deref().unwrap_or("")
    }

    /// Server-side processing time in seconds.
    pub fn time(&self) -> f64 {
        self.envelope.time
    }

    /// ISO-639-2 code of the language the document was analyzed with.
    pub fn language(&self) -> Option<&str> {
        self.envelope.response.language.as_deref()
    }

    /// Whether the language detector was confident in its identification.
    pub fn language_is_reliable(&self) -> Option<bool> {
        self.envelope.response.language_is_reliable
    }

    /// The original text, when `cleanup.returnRaw` was requested.
    pub fn raw_text(&self) -> &str {
        self.envelope.response.raw_text.as_deref().unwrap_or("")
    }

    /// The text after cleanup, when `cleanup.returnCleaned` was requested.
    pub fn cleaned_text(&self) -> &str {
        self.envelope.response.cleaned_text.as_deref().unwrap_or("")
    }

    /// Output generated while running the embedded Prolog engine on the
    /// request rules.
    pub fn custom_annotation_output(&self) -> &str {
        self.envelope
            .response
            .custom_annotation_output
            .as_deref()
            .unwrap_or("")
    }

    pub fn topics(&self) -> &[Topic] {
        &self.envelope.response.topics
    }

    pub fn coarse_topics(&self) -> &[Topic] {
        &self.envelope.response.coarse_topics
    }

    pub fn entities(&self) -> &[Entity] {
        &self.envelope.response.entities
    }

    pub fn entailments(&self) -> &[Entailment] {
        &self.envelope.response.entailments
    }

    pub fn relations(&self) -> &[Relation] {
        &self.envelope.response.relations
    }

    pub fn properties(&self) -> &[Property] {
        &self.envelope.response.properties
    }

    pub fn noun_phrases(&self) -> &[NounPhrase] {
        &self.envelope.response.noun_phrases
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.envelope.response.sentences
    }

    pub fn custom_annotations(&self) -> &[CustomAnnotation] {
        &self.envelope.response.custom_annotations
    }

    /// Names of the custom rules that matched this document.
    pub fn matching_rules(&self) -> Vec<&str> {
        self.custom_annotations()
            .iter()
            .map(|annotation| annotation.name.as_str())
            .collect()
    }

    /// All words across all sentences, in document order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences().iter().flat_map(|sentence| sentence.words.iter())
    }

    /// The word at a document-global position.
    pub fn word_at(&self, position: u32) -> Option<&Word> {
        let (sentence_idx, word_idx) = *self.word_index.get(&position)?;
        Some(&self.envelope.response.sentences[sentence_idx].words[word_idx])
    }

    /// The words at the given positions. Positions that do not resolve to a
    /// word (e.g. the `words` extractor was not requested) are skipped.
    pub fn words_at(&self, positions: &[u32]) -> Vec<&Word> {
        positions
            .iter()
            .filter_map(|position| self.word_at(*position))
            .collect()
    }

    /// The words that make up an entity.
    pub fn matched_words(&self, entity: &Entity) -> Vec<&Word> {
        self.words_at(&entity.matching_tokens)
    }

    /// The words that generated an entailment.
    pub fn entailment_words(&self, entailment: &Entailment) -> Vec<&Word> {
        self.words_at(&entailment.word_positions)
    }

    /// The predicate words of a relation.
    pub fn predicate_words(&self, relation: &Relation) -> Vec<&Word> {
        self.words_at(&relation.word_positions)
    }

    /// The words that make up a relation param.
    pub fn param_words(&self, param: &RelationParam) -> Vec<&Word> {
        self.words_at(&param.word_positions)
    }

    /// The words that make up a noun phrase.
    pub fn phrase_words(&self, phrase: &NounPhrase) -> Vec<&Word> {
        self.words_at(&phrase.word_positions)
    }

    /// The predicate (focus) words of a property.
    pub fn property_predicate_words(&self, property: &Property) -> Vec<&Word> {
        self.words_at(&property.word_positions)
    }

    /// The words that modify the predicate of a property.
    pub fn property_words(&self, property: &Property) -> Vec<&Word> {
        self.words_at(&property.property_positions)
    }

    /// The entities whose matched tokens include the given word position.
    pub fn entities_at(&self, position: u32) -> impl Iterator<Item = &Entity> {
        self.entities()
            .iter()
            .filter(move |entity| entity.matching_tokens.contains(&position))
    }

    /// The entailments generated by the word at the given position.
    pub fn entailments_at(&self, position: u32) -> impl Iterator<Item = &Entailment> {
        self.entailments()
            .iter()
            .filter(move |entailment| entailment.word_positions.contains(&position))
    }

    /// The relations whose predicate includes the word at the given position.
    pub fn relations_at(&self, position: u32) -> impl Iterator<Item = &Relation> {
        self.relations()
            .iter()
            .filter(move |relation| relation.word_positions.contains(&position))
    }

    /// The noun phrases containing the word at the given position.
    pub fn noun_phrases_at(&self, position: u32) -> impl Iterator<Item = &NounPhrase> {
        self.noun_phrases()
            .iter()
            .filter(move |phrase| phrase.word_positions.contains(&position))
    }

    /// The distinct entities mentioned in a relation param.
    pub fn param_entities(&self, param: &RelationParam) -> Vec<&Entity> {
        self.entities()
            .iter()
            .filter(|entity| {
                entity
                    .matching_tokens
                    .iter()
                    .any(|position| param.word_positions.contains(position))
            })
            .collect()
    }

    /// The dependency-tree parent of a word, or `None` at the sentence root
    /// or when the `dependency-trees` extractor was not requested.
    pub fn parent_of(&self, word: &Word) -> Option<&Word> {
        let parent = word.parent_position?;
        if parent < 0 {
            return None;
        }
        self.word_at(parent as u32)
    }

    /// The dependency-tree children of a word. Empty for leaf words, or when
    /// the `dependency-trees` extractor was not requested.
    pub fn children_of(&self, word: &Word) -> Vec<&Word> {
        self.words()
            .filter(|candidate| candidate.parent_position == Some(word.position as i32))
            .collect()
    }

    /// The entity with the given document id.
    pub fn entity_by_document_id(&self, id: u32) -> Option<&Entity> {
        self.entities()
            .iter()
            .find(|entity| entity.document_id == Some(id))
    }

    /// The topic with the given id.
    pub fn topic_by_id(&self, id: u32) -> Option<&Topic> {
        self.topics().iter().find(|topic| topic.id == Some(id))
    }

    /// The coarse topic with the given id.
    pub fn coarse_topic_by_id(&self, id: u32) -> Option<&Topic> {
        self.coarse_topics().iter().find(|topic| topic.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Response {
        Response::from_json(json!({
            "ok": true,
            "time": 0.013,
            "response": {
                "language": "eng",
                "languageIsReliable": true,
                "rawText": "Barack Obama visited Paris.",
                "cleanedText": "Barack Obama visited Paris.",
                "customAnnotationOutput": "rule fired\n",
                "topics": [
                    {"id": 0, "label": "Politics", "wikiLink": "http://en.wikipedia.org/wiki/Politics", "score": 0.82}
                ],
                "coarseTopics": [
                    {"id": 0, "label": "Society", "score": 0.61}
                ],
                "entities": [
                    {
                        "id": 0,
                        "entityId": "Barack Obama",
                        "freebaseId": "/m/02mjmr",
                        "wikiLink": "http://en.wikipedia.org/wiki/Barack_Obama",
                        "matchedText": "Barack Obama",
                        "startingPos": 0,
                        "endingPos": 12,
                        "matchingTokens": [0, 1],
                        "freebaseTypes": ["/people/person"],
                        "relevanceScore": 0.9,
                        "confidenceScore": 2.5,
                        "type": ["Person"],
                        "data": {"spouse": ["Michelle Obama"]}
                    },
                    {
                        "id": 1,
                        "entityId": "Paris",
                        "matchedText": "Paris",
                        "startingPos": 21,
                        "endingPos": 26,
                        "matchingTokens": [3],
                        "relevanceScore": 0.7,
                        "confidenceScore": 1.8,
                        "type": ["Place"]
                    }
                ],
                "entailments": [
                    {
                        "id": 0,
                        "wordPositions": [2],
                        "priorScore": 0.2,
                        "contextScore": 0.5,
                        "score": 0.7,
                        "entailedTree": {"word": "visit"}
                    }
                ],
                "relations": [
                    {
                        "id": 0,
                        "wordPositions": [2],
                        "params": [
                            {"relation": "SUBJECT", "wordPositions": [0, 1]},
                            {"relation": "OBJECT", "wordPositions": [3]}
                        ]
                    }
                ],
                "properties": [
                    {"id": 0, "wordPositions": [2], "propertyPositions": [3]}
                ],
                "nounPhrases": [
                    {"id": 0, "wordPositions": [0, 1]}
                ],
                "sentences": [
                    {
                        "position": 0,
                        "words": [
                            {"position": 0, "parentPosition": 1, "relationToParent": "nn",
                             "token": "Barack", "stem": "barack", "lemma": "barack",
                             "partOfSpeech": "NNP", "startingPos": 0, "endingPos": 6},
                            {"position": 1, "parentPosition": 2, "relationToParent": "nsubj",
                             "token": "Obama", "stem": "obama", "lemma": "obama",
                             "partOfSpeech": "NNP", "startingPos": 7, "endingPos": 12},
                            {"position": 2, "parentPosition": -1,
                             "token": "visited", "stem": "visit", "lemma": "visit",
                             "partOfSpeech": "VBD", "startingPos": 13, "endingPos": 20,
                             "senses": [{"sense": "visit.v.01", "score": 0.85}]},
                            {"position": 3, "parentPosition": 2, "relationToParent": "dobj",
                             "token": "Paris", "stem": "paris", "lemma": "paris",
                             "partOfSpeech": "NNP", "startingPos": 21, "endingPos": 26},
                            {"position": 4, "parentPosition": -1,
                             "token": ".", "partOfSpeech": ".",
                             "startingPos": 26, "endingPos": 27}
                        ]
                    }
                ],
                "customAnnotations": [
                    {
                        "name": "presidentRule",
                        "contents": [
                            {
                                "key": "president",
                                "links": [{"annotationName": "entity", "linkedId": 0}]
                            },
                            {"key": "score", "floatValue": [0.5]}
                        ]
                    }
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_decodes_envelope_and_document_fields() {
        let response = fixture();

        assert!(response.ok());
        assert_eq!(response.error(), "");
        assert_eq!(response.time(), 0.013);
        assert_eq!(response.language(), Some("eng"));
        assert_eq!(response.language_is_reliable(), Some(true));
        assert_eq!(response.raw_text(), "Barack Obama visited Paris.");
        assert_eq!(response.cleaned_text(), "Barack Obama visited Paris.");
        assert_eq!(response.custom_annotation_output(), "rule fired\n");
    }

    #[test]
    fn test_decodes_annotation_fields() {
        let response = fixture();

        let topic = &response.topics()[0];
        assert_eq!(topic.label, "Politics");
        assert_eq!(
            topic.wiki_link.as_deref(),
            Some("http://en.wikipedia.org/wiki/Politics")
        );
        assert_eq!(topic.score, 0.82);
        assert_eq!(response.coarse_topics()[0].label, "Society");

        let obama = &response.entities()[0];
        assert_eq!(obama.document_id, Some(0));
        assert_eq!(obama.entity_id.as_deref(), Some("Barack Obama"));
        assert_eq!(obama.freebase_id.as_deref(), Some("/m/02mjmr"));
        assert_eq!(obama.matched_text.as_deref(), Some("Barack Obama"));
        assert_eq!(obama.matching_tokens, vec![0, 1]);
        assert_eq!(obama.freebase_types, vec!["/people/person"]);
        assert_eq!(obama.dbpedia_types, vec!["Person"]);
        assert_eq!(obama.relevance_score, Some(0.9));
        assert_eq!(obama.confidence_score, Some(2.5));
        assert_eq!(obama.data["spouse"], json!(["Michelle Obama"]));

        let entailment = &response.entailments()[0];
        assert_eq!(entailment.entailed_word(), Some("visit"));
        assert_eq!(entailment.score, Some(0.7));

        let word = response.word_at(2).unwrap();
        assert_eq!(word.token, "visited");
        assert_eq!(word.lemma.as_deref(), Some("visit"));
        assert_eq!(word.part_of_speech.as_deref(), Some("VBD"));
        assert_eq!(word.senses[0].sense, "visit.v.01");
        assert_eq!(word.senses[0].score, 0.85);
    }

    #[test]
    fn test_words_are_flattened_in_document_order() {
        let response = fixture();

        let tokens: Vec<&str> = response.words().map(|word| word.token.as_str()).collect();
        assert_eq!(tokens, vec!["Barack", "Obama", "visited", "Paris", "."]);
        assert!(response.word_at(99).is_none());
    }

    #[test]
    fn test_entity_word_links() {
        let response = fixture();

        let obama = &response.entities()[0];
        let matched: Vec<&str> = response
            .matched_words(obama)
            .iter()
            .map(|word| word.token.as_str())
            .collect();
        assert_eq!(matched, vec!["Barack", "Obama"]);

        let at_paris: Vec<_> = response.entities_at(3).collect();
        assert_eq!(at_paris.len(), 1);
        assert_eq!(at_paris[0].entity_id.as_deref(), Some("Paris"));

        assert_eq!(response.entities_at(4).count(), 0);
    }

    #[test]
    fn test_dependency_tree_links() {
        let response = fixture();

        let barack = response.word_at(0).unwrap();
        let obama = response.word_at(1).unwrap();
        let visited = response.word_at(2).unwrap();

        assert_eq!(response.parent_of(barack).unwrap().token, "Obama");
        assert_eq!(response.parent_of(obama).unwrap().token, "visited");
        assert!(response.parent_of(visited).is_none());

        let children: Vec<&str> = response
            .children_of(visited)
            .iter()
            .map(|word| word.token.as_str())
            .collect();
        assert_eq!(children, vec!["Obama", "Paris"]);

        // The trailing period has no parent but is punctuation, so the verb
        // is the root.
        let root = response.sentences()[0].root_word().unwrap();
        assert_eq!(root.token, "visited");
    }

    #[test]
    fn test_relation_links() {
        let response = fixture();

        let relation = &response.relations()[0];
        let predicate: Vec<&str> = response
            .predicate_words(relation)
            .iter()
            .map(|word| word.token.as_str())
            .collect();
        assert_eq!(predicate, vec!["visited"]);

        let subject = &relation.params[0];
        assert_eq!(subject.relation, Some(ParamRelation::Subject));
        let subject_words: Vec<&str> = response
            .param_words(subject)
            .iter()
            .map(|word| word.token.as_str())
            .collect();
        assert_eq!(subject_words, vec!["Barack", "Obama"]);

        let subject_entities = response.param_entities(subject);
        assert_eq!(subject_entities.len(), 1);
        assert_eq!(subject_entities[0].entity_id.as_deref(), Some("Barack Obama"));

        let object = &relation.params[1];
        assert_eq!(object.relation, Some(ParamRelation::Object));
        let object_entities = response.param_entities(object);
        assert_eq!(object_entities[0].entity_id.as_deref(), Some("Paris"));

        assert_eq!(response.relations_at(2).count(), 1);
        assert_eq!(response.relations_at(0).count(), 0);
    }

    #[test]
    fn test_phrase_property_and_entailment_links() {
        let response = fixture();

        let phrase = &response.noun_phrases()[0];
        let phrase_tokens: Vec<&str> = response
            .phrase_words(phrase)
            .iter()
            .map(|word| word.token.as_str())
            .collect();
        assert_eq!(phrase_tokens, vec!["Barack", "Obama"]);
        assert_eq!(response.noun_phrases_at(1).count(), 1);
        assert_eq!(response.noun_phrases_at(3).count(), 0);

        let property = &response.properties()[0];
        assert_eq!(response.property_predicate_words(property)[0].token, "visited");
        assert_eq!(response.property_words(property)[0].token, "Paris");

        let entailment = &response.entailments()[0];
        assert_eq!(response.entailment_words(entailment)[0].token, "visited");
        assert_eq!(response.entailments_at(2).count(), 1);
    }

    #[test]
    fn test_custom_annotations() {
        let response = fixture();

        assert_eq!(response.matching_rules(), vec!["presidentRule"]);

        let annotation = &response.custom_annotations()[0];
        let president = annotation.content("president").unwrap();
        let link = &president.links[0];
        assert_eq!(link.annotation_name, "entity");

        let linked = response.entity_by_document_id(link.linked_id.unwrap()).unwrap();
        assert_eq!(linked.entity_id.as_deref(), Some("Barack Obama"));

        let score = annotation.content("score").unwrap();
        assert_eq!(score.float_value, vec![0.5]);
        assert!(annotation.content("missing").is_none());
    }

    #[test]
    fn test_annotation_id_lookups() {
        let response = fixture();

        assert!(response.entity_by_document_id(7).is_none());
        assert_eq!(response.topic_by_id(0).unwrap().label, "Politics");
        assert_eq!(response.coarse_topic_by_id(0).unwrap().label, "Society");
    }

    #[test]
    fn test_missing_sections_decode_empty() {
        let response = Response::from_json(json!({
            "ok": true,
            "time": 0.002,
            "response": {}
        }))
        .unwrap();

        assert!(response.ok());
        assert!(response.entities().is_empty());
        assert!(response.topics().is_empty());
        assert!(response.sentences().is_empty());
        assert!(response.custom_annotations().is_empty());
        assert_eq!(response.words().count(), 0);
        assert_eq!(response.raw_text(), "");
        assert!(response.language().is_none());
    }

    #[test]
    fn test_failed_analysis_surfaces_error() {
        let response = Response::from_json(json!({
            "ok": false,
            "time": 0.0,
            "error": "Your daily request limit has been exceeded"
        }))
        .unwrap();

        assert!(!response.ok());
        assert_eq!(response.error(), "Your daily request limit has been exceeded");
    }

    #[test]
    fn test_unknown_param_relation_decodes_as_other() {
        let response = Response::from_json(json!({
            "ok": true,
            "time": 0.001,
            "response": {
                "relations": [
                    {"id": 0, "wordPositions": [0], "params": [
                        {"relation": "LOCATION", "wordPositions": [1]}
                    ]}
                ]
            }
        }))
        .unwrap();

        assert_eq!(
            response.relations()[0].params[0].relation,
            Some(ParamRelation::Other)
        );
    }
}
