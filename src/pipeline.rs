//! The call pipeline: a chain of middleware stages threaded through one
//! [`CallContext`], terminating in the HTTP transport. Every public
//! operation function is a thin wrapper around [`perform_call`].

use tracing::{debug, warn};

use crate::error::Error;
use crate::operation::{HttpRequestMarshaler, HttpResponseUnmarshaler, OperationTarget, Target};
use crate::options::Options;
use crate::request::{Metadata, OutgoingRequest, Response};
use crate::resolver::EndpointParameters;
use crate::signing::SigningArgs;
use crate::time::SigningTime;
use url::Url;

/// The mutable state one call's middleware chain operates on. `target`
/// and `marshal` are fixed at construction; every other field is mutated
/// by some stage in the chain.
pub struct CallContext<'a> {
    pub options: Options,
    pub request: OutgoingRequest,
    pub response: Option<Response>,
    pub target: Target<'a>,
    marshal: &'a dyn Fn(&mut OutgoingRequest) -> Result<(), Error>,
}

/// One stage in the chain. Implementations call `next.run(ctx)` to
/// continue, or return early (with `Err`, typically) to short-circuit —
/// mirroring the Go chain-of-responsibility `Middleware` interface this
/// was adapted from.
pub trait Middleware: Send + Sync {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error>;
}

/// A borrowed suffix of the middleware chain still left to run.
pub struct Next<'a> {
    remaining: &'a [Box<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub fn run(self, ctx: &mut CallContext<'_>) -> Result<(), Error> {
        match self.remaining.split_first() {
            Some((mw, rest)) => mw.handle(ctx, Next { remaining: rest }),
            None => Ok(()),
        }
    }
}

struct ConfigValidationMiddleware;

impl Middleware for ConfigValidationMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        ctx.options.validate()?;
        next.run(ctx)
    }
}

struct RequiredInputMiddleware;

impl Middleware for RequiredInputMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        match ctx.target {
            Target::BucketKey(bucket, key) => {
                if bucket.is_empty() {
                    return Err(Error::InputInvalid("bucket is mandatory".to_string()));
                }
                if key.is_empty() {
                    return Err(Error::InputInvalid("object key is mandatory".to_string()));
                }
            }
            Target::Bucket(bucket) => {
                if bucket.is_empty() {
                    return Err(Error::InputInvalid("bucket is mandatory".to_string()));
                }
            }
            Target::None => {}
        }
        next.run(ctx)
    }
}

struct UserAgentMiddleware;

impl Middleware for UserAgentMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        if let Some(user_agent) = ctx.options.user_agent.clone() {
            if !user_agent.is_empty() {
                ctx.request.set_header("user-agent", &user_agent)?;
            }
        }
        next.run(ctx)
    }
}

struct ResolveEndpointMiddleware;

impl Middleware for ResolveEndpointMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        let (bucket, key) = match ctx.target {
            Target::BucketKey(bucket, key) => (bucket.to_string(), key.to_string()),
            Target::Bucket(bucket) => (bucket.to_string(), String::new()),
            Target::None => (String::new(), String::new()),
        };

        let params = EndpointParameters {
            bucket,
            key,
            host: ctx.options.endpoint_host.clone(),
            use_ssl: ctx.options.use_ssl,
            use_path_style: ctx.options.use_path_style,
        };

        let endpoint = ctx.options.endpoint_resolver.resolve_endpoint(&params)?;
        let url = Url::parse(&endpoint.url)
            .map_err(|err| Error::EndpointUnresolvable(format!("resolved endpoint is not a URL: {err}")))?;
        ctx.request.uri = url;

        next.run(ctx)
    }
}

struct MarshalMiddleware;

impl Middleware for MarshalMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        (ctx.marshal)(&mut ctx.request).map_err(|err| Error::MarshalFailed(err.to_string()))?;
        next.run(ctx)
    }
}

struct SignerMiddleware;

impl Middleware for SignerMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        debug!(region = %ctx.options.signing_region, "signing request");
        ctx.options.signer.sign(SigningArgs {
            request: &mut ctx.request,
            credentials: &ctx.options.credentials,
            region: &ctx.options.signing_region,
            signing_time: SigningTime::now(),
        })?;
        next.run(ctx)
    }
}

struct HttpRequesterMiddleware;

impl Middleware for HttpRequesterMiddleware {
    fn handle(&self, ctx: &mut CallContext<'_>, next: Next<'_>) -> Result<(), Error> {
        let response = ctx.options.http_client.send(&ctx.request)?;
        ctx.response = Some(response);
        next.run(ctx)
    }
}

fn chain() -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(ConfigValidationMiddleware),
        Box::new(RequiredInputMiddleware),
        Box::new(UserAgentMiddleware),
        Box::new(ResolveEndpointMiddleware),
        Box::new(MarshalMiddleware),
        Box::new(SignerMiddleware),
        Box::new(HttpRequesterMiddleware),
    ]
}

/// Runs one operation's input through the full middleware chain and
/// unmarshals its output, returning both the typed output and the
/// [`Metadata`] describing what was actually sent and received — even on
/// failure, so callers can inspect a partial request.
pub fn perform_call<Input, Output>(options: &Options, input: &Input) -> Result<(Output, Metadata), Error>
where
    Input: HttpRequestMarshaler + OperationTarget,
    Output: HttpResponseUnmarshaler,
{
    let marshal = |request: &mut OutgoingRequest| input.marshal_http(request);
    let mut ctx = CallContext {
        options: options.clone(),
        request: OutgoingRequest::new(http::Method::GET, Url::parse("http://unresolved.invalid").unwrap()),
        response: None,
        target: input.target(),
        marshal: &marshal,
    };

    let stages = chain();
    let result = Next { remaining: &stages }.run(&mut ctx);

    let metadata = Metadata {
        request: ctx.request.clone(),
        response: ctx.response.clone(),
    };

    if let Err(err) = result {
        warn!(error = %err, "call failed");
        return Err(err);
    }

    let response = ctx
        .response
        .as_ref()
        .expect("http requester middleware always sets a response on success");

    let output = Output::unmarshal_http(response).map_err(|err| {
        warn!(error = %err, "failed to unmarshal response");
        err
    })?;

    Ok((output, metadata))
}
