use proc_macro2::{Delimiter, Span, TokenStream, TokenTree};
use quote::quote;
use syn::{
    Expr, LitStr, Result,
    parse::{Parse, ParseStream},
};

/// Input for the sql! procedural macro
pub enum SqlInput {
    /// String literal input: sql!("SELECT * FROM {table}")
    StringLiteral(LitStr),
    /// Token stream input: sql!(SELECT * FROM {table})
    TokenStream(TokenStream),
    /// Printf-style input: sql!("SELECT * FROM {} WHERE {} = {}", table, column, value)
    Printf { template: LitStr, args: Vec<Expr> },
}

impl Parse for SqlInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // Try to parse as string literal first
        if input.peek(LitStr) {
            let template = input.parse::<LitStr>()?;

            // Check if there are comma-separated arguments after the template
            if input.peek(syn::Token![,]) {
                input.parse::<syn::Token![,]>()?; // consume comma

                let mut args = Vec::new();

                // Parse first argument
                if !input.is_empty() {
                    args.push(input.parse::<Expr>()?);

                    // Parse remaining arguments
                    while input.peek(syn::Token![,]) {
                        input.parse::<syn::Token![,]>()?; // consume comma
                        if !input.is_empty() {
                            args.push(input.parse::<Expr>()?);
                        }
                    }
                }

                Ok(SqlInput::Printf { template, args })
            } else {
                Ok(SqlInput::StringLiteral(template))
            }
        } else {
            // Parse the rest as a token stream
            let tokens: TokenStream = input.parse()?;
            Ok(SqlInput::TokenStream(tokens))
        }
    }
}

/// A parsed segment of the SQL template
#[derive(Clone)]
enum SqlSegment {
    /// Raw SQL text that becomes SQL::text()
    Text(String),
    /// An expression inside {braces} that should have .to_sql() called on it
    Expression(Expr),
}

impl std::fmt::Debug for SqlSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlSegment::Text(text) => f.debug_tuple("Text").field(text).finish(),
            SqlSegment::Expression(_) => f.debug_tuple("Expression").field(&"<expr>").finish(),
        }
    }
}

/// Parse token stream into text and expression segments
/// This converts the token stream back to a string representation and then uses the string parser
fn parse_token_stream(tokens: TokenStream) -> Result<Vec<SqlSegment>> {
    // Convert token stream back to string with proper spacing
    let mut sql_string = String::new();
    let mut tokens_iter = tokens.into_iter().peekable();

    while let Some(token) = tokens_iter.next() {
        match token {
            TokenTree::Group(group) if group.delimiter() == Delimiter::Brace => {
                // Add space before brace if needed
                if !sql_string.is_empty() && !sql_string.ends_with(' ') {
                    sql_string.push(' ');
                }
                sql_string.push('{');
                sql_string.push_str(&group.stream().to_string());
                sql_string.push('}');
            }
            _ => {
                // Add space before token if needed
                if !sql_string.is_empty() {
                    match &token {
                        TokenTree::Punct(p) if p.as_char() == '.' => {
                            // No space before dots
                        }
                        _ => {
                            sql_string.push(' ');
                        }
                    }
                }

                sql_string.push_str(&token.to_string());

                // Add space after token if needed
                if let Some(next_token) = tokens_iter.peek() {
                    match (&token, next_token) {
                        (TokenTree::Punct(p), _) if p.as_char() == '.' => {
                            // No space after dots
                        }
                        (_, TokenTree::Punct(p)) if p.as_char() == '.' => {
                            // No space before dots
                        }
                        (_, TokenTree::Group(g)) if g.delimiter() == Delimiter::Brace => {
                            // No space before brace groups
                        }
                        (TokenTree::Punct(p), _) if matches!(p.as_char(), '=' | '<' | '>') => {
                            // Space after operators
                            sql_string.push(' ');
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    // Now use the string parser which handles spacing correctly
    parse_template(&sql_string)
}

/// Parse the template string into text and expression segments
/// If `positional_args` is provided, empty braces {} will be replaced with the arguments
fn parse_template_with_args(
    template: &str,
    positional_args: Option<&[Expr]>,
) -> Result<Vec<SqlSegment>> {
    let mut segments = Vec::new();
    let mut chars = template.chars().peekable();
    let mut current_text = String::new();
    let mut arg_index = 0;

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                // Check for escaped brace {{
                if chars.peek() == Some(&'{') {
                    chars.next(); // consume second {
                    current_text.push('{');
                    continue;
                }

                // Add any accumulated text as a text segment (preserve exact spacing)
                if !current_text.is_empty() {
                    segments.push(SqlSegment::Text(current_text.clone()));
                    current_text.clear();
                }

                // Parse the expression inside braces
                let mut expr_content = String::new();
                let mut brace_count = 1;

                while let Some(inner_ch) = chars.next() {
                    match inner_ch {
                        '{' => {
                            brace_count += 1;
                            expr_content.push(inner_ch);
                        }
                        '}' => {
                            brace_count -= 1;
                            if brace_count == 0 {
                                break;
                            }
                            expr_content.push(inner_ch);
                        }
                        _ => expr_content.push(inner_ch),
                    }
                }

                if brace_count != 0 {
                    return Err(syn::Error::new(
                        Span::call_site(),
                        "Unmatched braces in SQL template",
                    ));
                }

                // Handle empty braces for positional arguments
                if expr_content.is_empty() {
                    if let Some(args) = positional_args {
                        if arg_index >= args.len() {
                            return Err(syn::Error::new(
                                Span::call_site(),
                                format!(
                                    "Not enough arguments provided. Expected at least {}, got {}",
                                    arg_index + 1,
                                    args.len()
                                ),
                            ));
                        }
                        segments.push(SqlSegment::Expression(args[arg_index].clone()));
                        arg_index += 1;
                    } else {
                        return Err(syn::Error::new(
                            Span::call_site(),
                            "Empty expression in SQL template",
                        ));
                    }
                } else {
                    // Named expression - parse it
                    let expr: Expr = syn::parse_str(&expr_content).map_err(|e| {
                        syn::Error::new(
                            Span::call_site(),
                            format!("Invalid expression in SQL template: {}", e),
                        )
                    })?;

                    segments.push(SqlSegment::Expression(expr));
                }
            }
            '}' => {
                // Check for escaped brace }}
                if chars.peek() == Some(&'}') {
                    chars.next(); // consume second }
                    current_text.push('}');
                    continue;
                }

                return Err(syn::Error::new(
                    Span::call_site(),
                    "Unmatched closing brace in SQL template",
                ));
            }
            _ => current_text.push(ch),
        }
    }

    // Add any remaining text (preserve exact spacing)
    if !current_text.is_empty() {
        segments.push(SqlSegment::Text(current_text));
    }

    // Check if we used all positional arguments
    if let Some(args) = positional_args {
        if arg_index != args.len() {
            return Err(syn::Error::new(
                Span::call_site(),
                format!(
                    "Too many arguments provided. Expected {}, got {}",
                    arg_index,
                    args.len()
                ),
            ));
        }
    }

    Ok(segments)
}

/// Parse the template string into text and expression segments (convenience wrapper)
fn parse_template(template: &str) -> Result<Vec<SqlSegment>> {
    parse_template_with_args(template, None)
}

/// Generate the TokenStream for the sql! macro implementation
pub fn sql_impl(input: SqlInput) -> Result<TokenStream> {
    let segments = match input {
        SqlInput::StringLiteral(template) => {
            let template_str = template.value();
            parse_template(&template_str)?
        }
        SqlInput::TokenStream(tokens) => parse_token_stream(tokens)?,
        SqlInput::Printf { template, args } => {
            let template_str = template.value();
            parse_template_with_args(&template_str, Some(&args))?
        }
    };

    if segments.is_empty() {
        return Ok(quote! {
            ::drizzle_rs::core::SQL::empty()
        });
    }

    // Generate code for each segment
    let mut segment_tokens = Vec::new();

    for segment in segments {
        match segment {
            SqlSegment::Text(text) => {
                if !text.is_empty() {
                    segment_tokens.push(quote! {
                        ::drizzle_rs::core::SQL::text(#text)
                    });
                }
            }
            SqlSegment::Expression(expr) => {
                segment_tokens.push(quote! {
                    ::drizzle_rs::core::ToSQL::to_sql(&#expr)
                });
            }
        }
    }

    // If we only have one segment, return it directly
    if segment_tokens.len() == 1 {
        return Ok(segment_tokens.into_iter().next().unwrap());
    }

    // Chain multiple segments together with .append()
    let mut iter = segment_tokens.into_iter();
    let mut result = iter.next().unwrap();

    for segment in iter {
        result = quote! {
            #result.append(#segment)
        };
    }

    Ok(result)
}
