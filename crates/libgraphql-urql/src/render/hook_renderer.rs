use crate::OperationFacts;
use crate::OperationKind;
use crate::render::operation_facts::optional_marker;

/// Name of the caller-specializable data generic on subscription hooks.
const SUBSCRIPTION_DATA_PARAM: &str = "TData";

/// Renders the `use*` hook for one operation.
pub fn render_hook(facts: &OperationFacts) -> String {
    match facts.kind() {
        OperationKind::Mutation => render_mutation_hook(facts),
        OperationKind::Query => render_query_hook(facts),
        OperationKind::Subscription => render_subscription_hook(facts),
    }
}

// Mutations are triggered explicitly through the returned executor, so the
// hook itself takes nothing.
fn render_mutation_hook(facts: &OperationFacts) -> String {
    format!(
        concat!(
            "export function {hook}() {{\n",
            "  return Urql.useMutation{generics}({document});\n",
            "}};",
        ),
        hook = facts.names().hook(),
        generics = facts.generics().render(),
        document = facts.document(),
    )
}

fn render_query_hook(facts: &OperationFacts) -> String {
    let generics = facts.generics();
    format!(
        concat!(
            "export function {hook}(options{opt}: Omit<Urql.UseQueryArgs<{variables}>, 'query'>) {{\n",
            "  return Urql.useQuery{generics}({{ query: {document}, ...options }});\n",
            "}};",
        ),
        hook = facts.names().hook(),
        opt = optional_marker(facts.strict_required()),
        variables = generics.variables_type(),
        generics = generics.render(),
        document = facts.document(),
    )
}

fn render_subscription_hook(facts: &OperationFacts) -> String {
    let generics = facts.generics();
    format!(
        concat!(
            "export function {hook}<{data} = {result}>(options: Omit<Urql.UseSubscriptionArgs<{variables}>, 'query'> = {{}}, handler?: Urql.SubscriptionHandler<{result}, {data}>) {{\n",
            "  return Urql.useSubscription{generics}({{ query: {document}, ...options }}, handler);\n",
            "}};",
        ),
        hook = facts.names().hook(),
        data = SUBSCRIPTION_DATA_PARAM,
        result = generics.result_type(),
        variables = generics.variables_type(),
        generics = generics.render_with_data_param(SUBSCRIPTION_DATA_PARAM),
        document = facts.document(),
    )
}
