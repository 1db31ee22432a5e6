use super::*;
use crate::execution::ExecutionStrategy;
use crate::execution::Member;
use crate::execution::ObjectSource;
use crate::schema::SchemaConfig;
use crate::types::Argument;
use crate::types::Field;
use crate::types::ObjectTypeConfig;
use crate::types::TypeAnnotation;
use crate::types::TypeArena;
use crate::types::TypeId;
use pretty_assertions::assert_eq;
use serde_json::json;

struct Author;
impl ObjectSource for Author {
    fn member(&self, name: &str) -> Option<Member> {
        Some(match name {
            "id" => Member::value(123),
            "name" => Member::value("John Smith"),
            "pic" => Member::method(|params| {
                let dimension = |arg: &str| params.arg(arg)
                    .and_then(Value::as_i64)
                    .map(|n| RawValue::from(format!("{n}")))
                    .unwrap_or_default();
                Ok(RawValue::from(IndexMap::from([
                    ("url".to_string(), RawValue::from("cdn://123")),
                    ("width".to_string(), dimension("width")),
                    ("height".to_string(), dimension("height")),
                ])))
            }),
            "recentArticle" => Member::getter(|| Ok(article(1))),
            _ => return None,
        })
    }

    fn type_name(&self) -> Option<&str> {
        Some("Author")
    }
}

fn article(id: i64) -> RawValue {
    RawValue::from(IndexMap::from([
        ("id".to_string(), RawValue::from(id.to_string())),
        ("isPublished".to_string(), RawValue::from(true)),
        ("author".to_string(), RawValue::object(Author)),
        ("title".to_string(), RawValue::from(format!("My Article {id}"))),
        ("body".to_string(), RawValue::from("This is a post")),
        ("hidden".to_string(), RawValue::from("This data is not exposed in the schema")),
        ("keywords".to_string(), RawValue::List(vec![
            RawValue::from("foo"),
            RawValue::from("bar"),
            RawValue::from(1),
            RawValue::from(true),
            RawValue::Null,
        ])),
    ]))
}

fn blog_schema() -> Schema {
    let mut arena = TypeArena::new();

    let image_id = arena.add_object(
        ObjectTypeConfig::new("Image")
            .with_field("url", Field::new(TypeId::STRING))
            .with_field("width", Field::new(TypeId::INT))
            .with_field("height", Field::new(TypeId::INT)),
    );
    let author_id = arena.add_object(
        ObjectTypeConfig::new("Author")
            .with_field("id", Field::new(TypeId::STRING))
            .with_field("name", Field::new(TypeId::STRING))
            .with_field(
                "pic",
                Field::new(image_id)
                    .with_argument("width", Argument::new(TypeId::INT))
                    .with_argument("height", Argument::new(TypeId::INT)),
            ),
    );
    let article_id = arena.add_object(
        ObjectTypeConfig::new("Article")
            .with_field("id", Field::new(TypeAnnotation::non_null(TypeId::STRING)))
            .with_field("isPublished", Field::new(TypeId::BOOLEAN))
            .with_field("author", Field::new(author_id))
            .with_field("title", Field::new(TypeId::STRING))
            .with_field("body", Field::new(TypeId::STRING))
            .with_field("keywords", Field::new(TypeAnnotation::list(TypeId::STRING))),
    );
    arena.add_field_config(author_id, "recentArticle", Field::new(article_id));

    let query_id = arena.add_object(
        ObjectTypeConfig::new("Query")
            .with_field(
                "article",
                Field::new(article_id)
                    .with_argument("id", Argument::new(TypeId::ID))
                    .with_resolver(|params| {
                        let id = params.arg("id")
                            .and_then(Value::as_str)
                            .ok_or("missing article id")?
                            .parse::<i64>()?;
                        Ok(article(id))
                    }),
            )
            .with_field(
                "feed",
                Field::new(TypeAnnotation::list(article_id))
                    .with_resolver(|_| Ok(RawValue::List((1..=10).map(article).collect()))),
            ),
    );

    Schema::new(arena, SchemaConfig {
        query: Some(query_id),
        ..SchemaConfig::default()
    }).expect("blog schema builds")
}

const BLOG_QUERY: &str = "
    {
      feed {
        id,
        title
      },
      article(id: 1) {
        ...articleFields,
        author {
          id,
          name,
          pic(width: 640, height: 480) {
            url,
            width,
            height
          },
          recentArticle {
            ...articleFields,
            keywords
          }
        }
      }
    }

    fragment articleFields on Article {
      id,
      isPublished,
      title,
      body,
      hidden,
      notdefined
    }
";

fn expected_blog_result() -> serde_json::Value {
    let feed = (1..=10)
        .map(|id| json!({
            "id": id.to_string(),
            "title": format!("My Article {id}"),
        }))
        .collect::<Vec<_>>();
    json!({
        "data": {
            "feed": feed,
            "article": {
                "id": "1",
                "isPublished": true,
                "title": "My Article 1",
                "body": "This is a post",
                "author": {
                    "id": "123",
                    "name": "John Smith",
                    "pic": {
                        "url": "cdn://123",
                        "width": 640,
                        "height": 480,
                    },
                    "recentArticle": {
                        "id": "1",
                        "isPublished": true,
                        "title": "My Article 1",
                        "body": "This is a post",
                        "keywords": ["foo", "bar", "1", "true", null],
                    },
                },
            },
        },
    })
}

#[test]
fn executes_blog_query() {
    let schema = blog_schema();

    let result = run(&schema, BLOG_QUERY, RawValue::Null);

    assert!(result.is_ok(), "unexpected errors: {:?}", result.errors);
    assert_eq!(to_json(&result), expected_blog_result());
}

#[test]
fn response_keys_follow_selection_order() {
    let schema = blog_schema();

    let result = run(&schema, BLOG_QUERY, RawValue::Null);

    let data = result.data.expect("data is present");
    assert_eq!(data.keys().collect::<Vec<_>>(), vec!["feed", "article"]);
    let Some(Value::Object(article)) = data.get("article") else {
        panic!("expected `article` to be an object");
    };
    assert_eq!(
        article.keys().collect::<Vec<_>>(),
        vec!["id", "isPublished", "title", "body", "author"],
    );
}

#[test]
fn parallel_strategy_matches_serial() {
    let schema = blog_schema();
    let doc = parse(BLOG_QUERY);

    let serial = execute(ExecuteParams::new(&schema, &doc));
    let parallel = execute(
        ExecuteParams::new(&schema, &doc).with_strategy(ExecutionStrategy::Parallel),
    );

    assert_eq!(serial, parallel);
    assert_eq!(to_json(&parallel), expected_blog_result());
}

#[test]
fn same_schema_serves_concurrent_executions() {
    let schema = blog_schema();

    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| run(&schema, BLOG_QUERY, RawValue::Null)))
            .collect::<Vec<_>>();
        handles.into_iter()
            .map(|handle| handle.join().expect("execution thread completes"))
            .collect::<Vec<_>>()
    });

    for result in results {
        assert_eq!(to_json(&result), expected_blog_result());
    }
}
