use crate::CLIENT_BINDING;
use crate::LoaderMode;
use crate::OperationFacts;
use crate::OperationKind;
use crate::render::operation_facts::optional_marker;

/// The parts in which a query loader and a mutation action differ.
struct LoaderFlavor {
    args_type: &'static str,
    client_method: &'static str,
    data_hook: String,
    data_reader: &'static str,
    function_name: String,
    variables_parser: &'static str,
    with_abort_signal: bool,
}
impl LoaderFlavor {
    fn for_operation(facts: &OperationFacts) -> Option<Self> {
        let names = facts.names();
        match facts.kind() {
            OperationKind::Mutation => Some(Self {
                args_type: "ActionFunctionArgs",
                client_method: "mutation",
                data_hook: names.action_data_hook(),
                data_reader: "useActionData",
                function_name: names.action(),
                variables_parser: "parseAction",
                with_abort_signal: false,
            }),
            OperationKind::Query => Some(Self {
                args_type: "LoaderFunctionArgs",
                client_method: "query",
                data_hook: names.loader_data_hook(),
                data_reader: "useLoaderData",
                function_name: names.loader(),
                variables_parser: "parseLoader",
                with_abort_signal: true,
            }),
            // Route loaders and actions have no notion of a subscription.
            OperationKind::Subscription => None,
        }
    }
}

/// Renders the loader (query) or action (mutation) factory for one
/// operation followed by the hook that reads its data. Subscriptions render
/// nothing.
pub fn render_loader_pair(facts: &OperationFacts, mode: &LoaderMode) -> String {
    let Some(flavor) = LoaderFlavor::for_operation(facts) else {
        return String::new();
    };
    format!(
        "{}\n\n{}",
        render_factory(facts, &flavor, mode),
        render_data_hook(&flavor),
    )
}

fn render_factory(
    facts: &OperationFacts,
    flavor: &LoaderFlavor,
    mode: &LoaderMode,
) -> String {
    let required = facts.lenient_required();
    let generics = facts.generics();
    let variables_type = generics.variables_type();
    let opt = optional_marker(required);
    let options_type = format!(
        "Omit<Partial<Urql.OperationContext>, 'fetchOptions'> & {{ variables{opt}: {variables_type} }}",
    );
    let args_type = flavor.args_type;

    let resolve_options = if required {
        format!(
            concat!(
                "    const resolved: {options_type} = typeof options === 'function' ? await options(args) : options;\n",
                "    const {{ variables, ...context }} = resolved;\n",
            ),
            options_type = options_type,
        )
    } else {
        format!(
            concat!(
                "    const resolved: {options_type} = (typeof options === 'function' ? await options(args) : options) ?? {{}};\n",
                "    const {{ variables: declared, ...context }} = resolved;\n",
                "    const variables = declared ?? await {parser}<{variables_type}>(args);\n",
            ),
            options_type = options_type,
            parser = flavor.variables_parser,
            variables_type = variables_type,
        )
    };

    let request_context = if flavor.with_abort_signal {
        "{ ...context, fetchOptions: { signal: args.request.signal } }"
    } else {
        "context"
    };

    format!(
        concat!(
            "export function {name}(options{opt}: {options_type} | ((args: {args_type}) => {options_type} | Promise<{options_type}>)) {{\n",
            "  return async (args: {args_type}) => {{\n",
            "{resolve_options}",
            "    const result = await {client}.{method}{generics}({document}, variables, {request_context}).toPromise();\n",
            "    return result.data;\n",
            "  }};\n",
            "}};",
        ),
        name = flavor.function_name,
        opt = opt,
        options_type = options_type,
        args_type = args_type,
        resolve_options = resolve_options,
        client = client_expression(mode),
        method = flavor.client_method,
        generics = generics.render(),
        document = facts.document(),
        request_context = request_context,
    )
}

fn render_data_hook(flavor: &LoaderFlavor) -> String {
    format!(
        concat!(
            "export function {hook}() {{\n",
            "  return {reader}<ReturnType<typeof {name}>>();\n",
            "}};",
        ),
        hook = flavor.data_hook,
        reader = flavor.data_reader,
        name = flavor.function_name,
    )
}

fn client_expression(mode: &LoaderMode) -> String {
    match mode {
        LoaderMode::ExternalClient(_) => CLIENT_BINDING.to_string(),
        LoaderMode::ContextClient | LoaderMode::Disabled => format!(
            "(args.context as {{ {CLIENT_BINDING}: Urql.Client }}).{CLIENT_BINDING}",
        ),
    }
}
