//! Integration tests for presearcher components and analyzer composition.

use std::any::Any;
use std::sync::Arc;

use presearch::analysis::token::{Token, TokenStream};
use presearch::prelude::*;
use presearch::presearcher::{
    WILDCARD_EXTRA_TOKEN, WILDCARD_PREFIX_TAG, WildcardPrefixComponent,
    build_default_query_analyzer,
};
use presearch::term_extractor::QueryAnalyzer;

/// A vendor-specific query kind: matches documents tagged with a region.
#[derive(Debug)]
struct RegionQuery {
    region: String,
}

impl CustomQuery for RegionQuery {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn description(&self) -> String {
        format!("region:{}", self.region)
    }
}

#[derive(Debug)]
struct RegionTreeBuilder;

impl QueryTreeBuilder for RegionTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Custom(q) if q.as_any().is::<RegionQuery>())
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Custom(custom) = query else {
            return Err(PresearchError::invalid_operation(
                "RegionTreeBuilder invoked on a non-custom query",
            ));
        };
        let region_query = custom
            .as_any()
            .downcast_ref::<RegionQuery>()
            .ok_or_else(|| {
                PresearchError::invalid_operation("RegionTreeBuilder invoked on a foreign kind")
            })?;
        Ok(QueryTree::term(QueryTerm::new(
            "region",
            region_query.region.clone(),
            TermType::Custom("region".to_string()),
        )))
    }
}

#[derive(Debug)]
struct RegionComponent;

impl PresearcherComponent for RegionComponent {
    fn query_tree_builders(&self) -> Vec<Arc<dyn QueryTreeBuilder>> {
        vec![Arc::new(RegionTreeBuilder)]
    }

    fn extra_token(&self, term_type: &TermType) -> Option<String> {
        matches!(term_type, TermType::Custom(tag) if tag == "region")
            .then(|| "__region__".to_string())
    }
}

#[test]
fn test_custom_kind_requires_its_component() {
    let query = SearchQuery::Custom(Arc::new(RegionQuery {
        region: "emea".to_string(),
    }));

    // Without the component the kind is unsupported.
    let bare = QueryAnalyzer::default();
    assert!(matches!(
        bare.collect_terms(&query),
        Err(PresearchError::UnsupportedQuery(_))
    ));

    // With it, the query indexes a tagged term.
    let components: Vec<Arc<dyn PresearcherComponent>> = vec![Arc::new(RegionComponent)];
    let analyzer = build_default_query_analyzer(&components);
    let terms = analyzer.collect_terms(&query).unwrap();
    assert_eq!(
        terms,
        [QueryTerm::new(
            "region",
            "emea",
            TermType::Custom("region".to_string())
        )]
    );
}

#[test]
fn test_custom_kind_nests_inside_boolean_structure() {
    let mut query = BooleanQuery::new();
    query.add_should(TermQuery::new("body", "storm"));
    query.add_should(SearchQuery::Custom(Arc::new(RegionQuery {
        region: "apac".to_string(),
    })));

    let components: Vec<Arc<dyn PresearcherComponent>> = vec![Arc::new(RegionComponent)];
    let analyzer = build_default_query_analyzer(&components);

    let terms = analyzer.collect_terms(&query.into()).unwrap();
    assert_eq!(terms.len(), 2);
    assert!(terms.contains(&QueryTerm::new("body", "storm", TermType::Exact)));
    assert!(
        terms.contains(&QueryTerm::new(
            "region",
            "apac",
            TermType::Custom("region".to_string())
        ))
    );
}

#[test]
fn test_component_extra_tokens() {
    let component = RegionComponent;
    assert_eq!(
        component.extra_token(&TermType::Custom("region".to_string())),
        Some("__region__".to_string())
    );
    assert_eq!(component.extra_token(&TermType::Exact), None);
}

/// A builder that overrides the default handling of term queries.
#[derive(Debug)]
struct ShoutingTermTreeBuilder;

impl QueryTreeBuilder for ShoutingTermTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Term(_))
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Term(term_query) = query else {
            return Err(PresearchError::invalid_operation(
                "ShoutingTermTreeBuilder invoked on a non-term query",
            ));
        };
        Ok(QueryTree::term(QueryTerm::new(
            term_query.field(),
            term_query.term().to_uppercase(),
            TermType::Exact,
        )))
    }
}

#[derive(Debug)]
struct ShoutingComponent;

impl PresearcherComponent for ShoutingComponent {
    fn query_tree_builders(&self) -> Vec<Arc<dyn QueryTreeBuilder>> {
        vec![Arc::new(ShoutingTermTreeBuilder)]
    }
}

#[test]
fn test_component_builders_override_defaults() {
    let components: Vec<Arc<dyn PresearcherComponent>> = vec![Arc::new(ShoutingComponent)];
    let analyzer = build_default_query_analyzer(&components);

    let terms = analyzer
        .collect_terms(&TermQuery::new("f", "quiet").into())
        .unwrap();
    assert_eq!(terms, [QueryTerm::new("f", "QUIET", TermType::Exact)]);
}

#[test]
fn test_earlier_components_override_later_ones() {
    let components: Vec<Arc<dyn PresearcherComponent>> = vec![
        Arc::new(ShoutingComponent),
        Arc::new(RegionComponent),
        Arc::new(ShadowedRegionComponent),
    ];
    let analyzer = build_default_query_analyzer(&components);

    let query = SearchQuery::Custom(Arc::new(RegionQuery {
        region: "emea".to_string(),
    }));
    let terms = analyzer.collect_terms(&query).unwrap();
    // RegionComponent is listed first, so its builder wins.
    assert_eq!(terms[0].field(), "region");
}

/// Registers a builder for the same kind as [`RegionTreeBuilder`] but maps
/// it to a different field; used to check registration-order precedence.
#[derive(Debug)]
struct ShadowedRegionComponent;

impl PresearcherComponent for ShadowedRegionComponent {
    fn query_tree_builders(&self) -> Vec<Arc<dyn QueryTreeBuilder>> {
        vec![Arc::new(ShadowedRegionTreeBuilder)]
    }
}

#[derive(Debug)]
struct ShadowedRegionTreeBuilder;

impl QueryTreeBuilder for ShadowedRegionTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Custom(q) if q.as_any().is::<RegionQuery>())
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        _query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        Ok(QueryTree::term(QueryTerm::new(
            "shadow",
            "never",
            TermType::Exact,
        )))
    }
}

#[test]
fn test_wildcard_component_end_to_end() {
    let component = WildcardPrefixComponent::default();
    let components: Vec<Arc<dyn PresearcherComponent>> = vec![Arc::new(component.clone())];
    let analyzer = build_default_query_analyzer(&components);

    // Query side: the pattern's prefix becomes a tagged term.
    let query = SearchQuery::from(WildcardQuery::new("body", "perco*").unwrap());
    let terms = analyzer.collect_terms(&query).unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].text(), "perco");
    assert_eq!(
        component.extra_token(terms[0].term_type()),
        Some(WILDCARD_EXTRA_TOKEN.to_string())
    );
    assert_eq!(
        *terms[0].term_type(),
        TermType::Custom(WILDCARD_PREFIX_TAG.to_string())
    );

    // Document side: token prefixes are expanded, so the stored prefix term
    // lines up with an ordinary document token.
    let stream: TokenStream = Box::new(vec![Token::new("percolator", 0)].into_iter());
    let document_tokens: Vec<String> = component
        .filter_document_tokens(stream)
        .unwrap()
        .map(|t| t.text)
        .collect();
    assert!(document_tokens.contains(&"perco".to_string()));
    assert!(document_tokens.contains(&"percolator".to_string()));
}
