mod operation_rule_tests;
mod validator_tests;

use crate::Diagnostic;
use crate::RuleId;
use crate::schema::TypeRegistry;
use crate::validation::Validator;
use crate::validation::rules;

/// Shared by the per-rule tests.
pub(super) const PETS_SDL: &str = r#"
schema {
  query: Query
  mutation: Mutation
  subscription: Subscription
}

enum DogCommand { SIT HEEL DOWN }
enum FurColor { BROWN BLACK TAN SPOTTED }

interface Pet { name: String }

type Dog implements Pet {
  name: String
  nickname: String
  barkVolume: Int
  doesKnowCommand(dogCommand: DogCommand!): Boolean
  isHousetrained(atOtherHomes: Boolean = true): Boolean
  owner: Human
}

type Cat implements Pet {
  name: String
  meowVolume: Int
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human {
  name: String
  pets: [Pet]
  relatives: [Human!]!
}

type Alien { name: String }

input ComplexInput {
  requiredField: Boolean!
  nonNullField: Boolean! = false
  intField: Int
  stringListField: [String]
}

scalar Json

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  floatArgField(floatArg: Float): String
  idArgField(idArg: ID): String
  stringListArgField(stringListArg: [String]): String
  stringListNonNullArgField(stringListNonNullArg: [String!]): String
  complexArgField(complexArg: ComplexInput): String
  enumArgField(enumArg: FurColor): String
  jsonArgField(jsonArg: Json): String
  multipleReqs(req1: Int!, req2: Int!): String
  multipleOpts(opt1: Int = 0, opt2: Int = 0): String
}

type Query {
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  human(id: ID): Human
  alien: Alien
  complicatedArgs: ComplicatedArgs
}

type Mutation { addPet(name: String!): Pet }

type Subscription {
  newPet: Pet
  petCount: Int
}

directive @onField on FIELD
directive @repeatableOnField repeatable on FIELD
directive @onQuery on QUERY
"#;

/// Runs the single built-in rule `rule_id` against [`PETS_SDL`].
pub(super) fn check_rule(rule_id: RuleId, query: &str) -> Vec<Diagnostic> {
    check_rule_with_schema(PETS_SDL, rule_id, query)
}

pub(super) fn check_rule_with_schema(sdl: &str, rule_id: RuleId, query: &str) -> Vec<Diagnostic> {
    let registry = TypeRegistry::from_sdl(sdl).unwrap();
    let document = rustberry_parser::parse_executable(query).unwrap();
    let (_, rule) = rules::all()
        .into_iter()
        .find(|(id, _)| *id == rule_id)
        .unwrap();
    let diagnostics = Validator::empty().with_rule(rule_id, rule).validate(&document, &registry);
    assert!(diagnostics.iter().all(|diagnostic| diagnostic.rule == rule_id));
    diagnostics
}

pub(super) fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|diagnostic| diagnostic.message.as_str()).collect()
}

/// The source text under each span of `diagnostic`.
pub(super) fn span_texts<'a>(diagnostic: &Diagnostic, source: &'a str) -> Vec<&'a str> {
    diagnostic
        .spans
        .iter()
        .map(|span| span.slice(source).unwrap())
        .collect()
}
